extern crate iconpack;

use iconpack::{encode_icns, encode_ico, RasterImage};
use std::thread;

//===========================================================================//

fn image_set(seed: u8) -> Vec<RasterImage> {
    [16, 32, 64, 128, 256]
        .iter()
        .enumerate()
        .map(|(index, &size)| {
            let fill = seed.wrapping_add(index as u8);
            RasterImage::new(size, size, vec![fill; 100 + 7 * index])
        })
        .collect()
}

#[test]
fn concurrent_encodes_do_not_share_state() {
    let inputs: Vec<Vec<RasterImage>> = (0..8).map(image_set).collect();
    let expected_ico: Vec<Vec<u8>> = inputs
        .iter()
        .map(|images| encode_ico(images).unwrap().into_data())
        .collect();
    let expected_icns: Vec<Vec<u8>> = inputs
        .iter()
        .map(|images| encode_icns(images).unwrap().into_encoded().into_data())
        .collect();
    thread::scope(|scope| {
        let mut handles = Vec::new();
        for (index, images) in inputs.iter().enumerate() {
            handles.push(scope.spawn(move || {
                let mut results = Vec::new();
                for _ in 0..20 {
                    let ico = encode_ico(images).unwrap().into_data();
                    let icns = encode_icns(images).unwrap().into_encoded();
                    let icns = icns.into_data();
                    results.push((ico, icns));
                }
                (index, results)
            }));
        }
        for handle in handles {
            let (index, results) = handle.join().unwrap();
            for (ico, icns) in results {
                assert_eq!(ico, expected_ico[index]);
                assert_eq!(icns, expected_icns[index]);
            }
        }
    });
}

//===========================================================================//
