use bls12_381_sswu::{map_to_curve, map_to_curve_bytes, CurvePoint, Error, Fp, MapToCurve};

struct TestCase {
    u: [u8; 48],
    expected: [[u8; 48]; 2],
}

fn check(cases: &[TestCase]) {
    for case in cases {
        let u = Fp::from_bytes(&case.u).unwrap();
        let p = map_to_curve(&u).unwrap();
        assert!(bool::from(p.is_on_curve()));
        let bytes = p.to_uncompressed();
        assert_eq!(bytes[..48], case.expected[0]);
        assert_eq!(bytes[48..], case.expected[1]);

        assert_eq!(map_to_curve_bytes(&case.u).unwrap(), p);
        assert_eq!(CurvePoint::map_to_curve(&u).unwrap(), p);
    }
}

// field elements and Q0/Q1 from RFC 9380 appendix J.9.1
#[test]
fn test_map_to_curve_rfc9380() {
    let cases = [
        // msg = ""
        TestCase {
            u: hex_literal::hex!("0ba14bd907ad64a016293ee7c2d276b8eae71f25a4b941eece7b0d89f17f75cb3ae5438a614fb61d6835ad59f29c564f"),
            expected: [
                hex_literal::hex!("11a3cce7e1d90975990066b2f2643b9540fa40d6137780df4e753a8054d07580db3b7f1f03396333d4a359d1fe3766fe"),
                hex_literal::hex!("0eeaf6d794e479e270da10fdaf768db4c96b650a74518fc67b04b03927754bac66f3ac720404f339ecdcc028afa091b7"),
            ],
        },
        TestCase {
            u: hex_literal::hex!("019b9bd7979f12657976de2884c7cce192b82c177c80e0ec604436a7f538d231552f0d96d9f7babe5fa3b19b3ff25ac9"),
            expected: [
                hex_literal::hex!("160003aaf1632b13396dbad518effa00fff532f604de1a7fc2082ff4cb0afa2d63b2c32da1bef2bf6c5ca62dc6b72f9c"),
                hex_literal::hex!("0d8bb2d14e20cf9f6036152ed386d79189415b6d015a20133acb4e019139b94e9c146aaad5817f866c95d609a361735e"),
            ],
        },
        // msg = "abc"
        TestCase {
            u: hex_literal::hex!("0d921c33f2bad966478a03ca35d05719bdf92d347557ea166e5bba579eea9b83e9afa5c088573c2281410369fbd32951"),
            expected: [
                hex_literal::hex!("125435adce8e1cbd1c803e7123f45392dc6e326d292499c2c45c5865985fd74fe8f042ecdeeec5ecac80680d04317d80"),
                hex_literal::hex!("0e8828948c989126595ee30e4f7c931cbd6f4570735624fd25aef2fa41d3f79cfb4b4ee7b7e55a8ce013af2a5ba20bf2"),
            ],
        },
        TestCase {
            u: hex_literal::hex!("003574a00b109ada2f26a37a91f9d1e740dffd8d69ec0c35e1e9f4652c7dba61123e9dd2e76c655d956e2b3462611139"),
            expected: [
                hex_literal::hex!("11def93719829ecda3b46aa8c31fc3ac9c34b428982b898369608e4f042babee6c77ab9218aad5c87ba785481eff8ae4"),
                hex_literal::hex!("0007c9cef122ccf2efd233d6eb9bfc680aa276652b0661f4f820a653cec1db7ff69899f8e52b8e92b025a12c822a6ce6"),
            ],
        },
    ];

    check(&cases);
}

#[test]
fn test_map_to_curve_small_inputs() {
    let cases = [
        TestCase {
            u: [0; 48],
            expected: [
                hex_literal::hex!("1956714e4244749bcdcef542ac99a287d43cb887988b8adabe76cc7d0153351193ea5769ba338d1ac61609ac3d3c8eaf"),
                hex_literal::hex!("0acadf436f71189445cf3148db5dd35b045e00de62e7e1b3c25164b5b097f5de804be566f90dbf69fc212c6d23d50639"),
            ],
        },
        TestCase {
            u: hex_literal::hex!("000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000001"),
            expected: [
                hex_literal::hex!("12b102f542ad7885a3af5aee959ec74f7995df741908854d631cf5855e7f0cd55fbd265471337c53623a484f4687b99e"),
                hex_literal::hex!("0db49b13f7c468aeef6d24c1eda8076baa37eee0ea79b11510f0314a2d76f49b8b69aa1ec83c4ee90c372a17f424df4d"),
            ],
        },
        // p - 1
        TestCase {
            u: hex_literal::hex!("1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaaa"),
            expected: [
                hex_literal::hex!("12b102f542ad7885a3af5aee959ec74f7995df741908854d631cf5855e7f0cd55fbd265471337c53623a484f4687b99e"),
                hex_literal::hex!("0c4c76d641bb7deb5bae82f455a3a56bba3f5ca4090b61aa5640a156c93a0188934255dfe917b116adc7d5e80bdacb5e"),
            ],
        },
        TestCase {
            u: hex_literal::hex!("000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000002"),
            expected: [
                hex_literal::hex!("0777e130908fbbd27ee308202708d88656808947df9c2c0346cce6ea81fa0b6aea6d0a4dea24c0b4bb6b2eaa8bc21855"),
                hex_literal::hex!("0e1f3212738f13579225d72cae5344d578d696b85bd018243468666810f3068be76bc0fa3255435ecd023d608788a912"),
            ],
        },
    ];

    check(&cases);
}

#[test]
fn test_map_to_curve_bytes_reduces_modulo_p() {
    let modulus = hex_literal::hex!("1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab");
    assert_eq!(
        map_to_curve_bytes(&modulus).unwrap(),
        map_to_curve(&Fp::zero()).unwrap()
    );

    // 2^384 - 1 is reduced rather than rejected
    let max = map_to_curve_bytes(&[0xff; 48]).unwrap();
    assert!(bool::from(max.is_on_curve()));
    assert_eq!(
        max,
        map_to_curve(&Fp::from_bytes_reduced(&[0xff; 48]).unwrap()).unwrap()
    );

    assert_eq!(
        map_to_curve_bytes(&[0u8; 49]),
        Err(Error::InvalidFieldElement)
    );
}

#[test]
fn test_map_to_curve_across_threads() {
    use ff::Field;
    use rand_core::SeedableRng;

    let mut rng = rand_xorshift::XorShiftRng::from_seed([
        0x59, 0x62, 0xbe, 0x5d, 0x76, 0x3d, 0x31, 0x8d, 0x17, 0xdb, 0x37, 0x32, 0x54, 0x06, 0xbc,
        0xe5,
    ]);
    let inputs: Vec<Fp> = (0..16).map(|_| <Fp as Field>::random(&mut rng)).collect();
    let expected: Vec<CurvePoint> = inputs.iter().map(|u| map_to_curve(u).unwrap()).collect();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let inputs = inputs.clone();
            std::thread::spawn(move || {
                inputs
                    .iter()
                    .map(|u| map_to_curve(u).unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
