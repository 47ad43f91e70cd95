extern crate iconpack;

use iconpack::{encode_icns, encode_ico, IconFormat, RasterImage};

//===========================================================================//

// Renders a small opaque square as a real PNG file.
fn png_payload(size: u32) -> Vec<u8> {
    let mut data = Vec::<u8>::new();
    {
        let mut encoder = png::Encoder::new(&mut data, size, size);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        let mut rgba = Vec::<u8>::new();
        for index in 0..(size * size) {
            rgba.extend_from_slice(&[(index % 251) as u8, 0x40, 0x80, 0xff]);
        }
        writer.write_image_data(&rgba).unwrap();
        writer.finish().unwrap();
    }
    data
}

fn read_u32_le(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

fn read_u32_be(data: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

// Walks the chunks after the ICNS header, returning (tag, length) pairs.
fn icns_chunks(data: &[u8]) -> Vec<(String, u32)> {
    let mut chunks = Vec::new();
    let mut offset = 8;
    while offset < data.len() {
        let tag = String::from_utf8_lossy(&data[offset..offset + 4]);
        let tag = tag.into_owned();
        let length = read_u32_be(data, offset + 4);
        chunks.push((tag, length));
        offset += length as usize;
    }
    assert_eq!(offset, data.len());
    chunks
}

//===========================================================================//

#[test]
fn ico_length_counts_header_directory_and_payloads() {
    for count in 1..6 {
        let images: Vec<RasterImage> = (0..count)
            .map(|index| RasterImage::new(16, 16, vec![7; 10 + 31 * index]))
            .collect();
        let payload_total: usize =
            images.iter().map(|image| image.payload().len()).sum();
        let encoded = encode_ico(&images).unwrap();
        assert_eq!(encoded.len(), 6 + 16 * count + payload_total);
        assert_eq!(&encoded.data()[..6], &[0, 0, 1, 0, count as u8, 0]);
    }
}

#[test]
fn ico_single_32x32_entry() {
    let payload = png_payload(32);
    let images = vec![RasterImage::from_png(payload.clone()).unwrap()];
    let encoded = encode_ico(&images).unwrap();
    let data = encoded.data();
    assert_eq!(encoded.content_type(), "image/x-icon");
    assert_eq!(&data[6..14], &[32, 32, 0, 0, 1, 0, 32, 0]);
    assert_eq!(read_u32_le(data, 14) as usize, payload.len());
    assert_eq!(read_u32_le(data, 18), 22);
    assert_eq!(&data[22..], payload.as_slice());
}

#[test]
fn ico_offsets_are_contiguous_in_input_order() {
    let sizes = [16, 32, 48, 64, 256];
    let images: Vec<RasterImage> = sizes
        .iter()
        .map(|&size| RasterImage::from_png(png_payload(size)).unwrap())
        .collect();
    let encoded = encode_ico(&images).unwrap();
    let data = encoded.data();
    let mut expected_offset = 6 + 16 * sizes.len() as u32;
    for (index, image) in images.iter().enumerate() {
        let entry = 6 + 16 * index;
        let data_size = read_u32_le(data, entry + 8);
        let data_offset = read_u32_le(data, entry + 12);
        assert_eq!(data_size as usize, image.payload().len());
        assert_eq!(data_offset, expected_offset);
        let start = data_offset as usize;
        assert_eq!(&data[start..start + data_size as usize], image.payload());
        expected_offset += data_size;
    }
    assert_eq!(expected_offset as usize, data.len());
}

#[test]
fn ico_stores_large_dimensions_as_zero() {
    let images = vec![
        RasterImage::new(256, 256, vec![1, 2, 3]),
        RasterImage::new(1024, 1024, vec![4, 5, 6]),
        RasterImage::new(300, 64, vec![7]),
    ];
    let encoded = encode_ico(&images).unwrap();
    let data = encoded.data();
    assert_eq!(&data[6..8], &[0, 0]);
    assert_eq!(&data[22..24], &[0, 0]);
    assert_eq!(&data[38..40], &[0, 64]);
}

#[test]
fn ico_embeds_non_png_payloads_verbatim() {
    let images = vec![RasterImage::new(48, 24, b"\x00garbage\xff".to_vec())];
    let encoded = encode_ico(&images).unwrap();
    assert_eq!(&encoded.data()[22..], b"\x00garbage\xff");
}

#[test]
fn ico_encoding_is_deterministic() {
    let images = vec![
        RasterImage::from_png(png_payload(16)).unwrap(),
        RasterImage::from_png(png_payload(48)).unwrap(),
    ];
    assert_eq!(encode_ico(&images).unwrap(), encode_ico(&images).unwrap());
}

//===========================================================================//

#[test]
fn icns_header_records_total_length() {
    let image_sets = vec![
        vec![RasterImage::new(16, 16, vec![])],
        vec![
            RasterImage::new(128, 128, vec![9; 1000]),
            RasterImage::new(48, 48, vec![9; 77]),
            RasterImage::new(1024, 1024, vec![9; 4321]),
        ],
        vec![RasterImage::new(24, 24, vec![9; 5])],
    ];
    for images in image_sets.iter() {
        let output = encode_icns(images).unwrap();
        let data = output.encoded().data();
        assert_eq!(&data[..4], b"icns");
        assert_eq!(read_u32_be(data, 4) as usize, data.len());
    }
}

#[test]
fn icns_skips_unregistered_size() {
    let with_48 = vec![
        RasterImage::new(32, 32, vec![1; 40]),
        RasterImage::new(48, 48, vec![2; 50]),
    ];
    let without_48 = vec![RasterImage::new(32, 32, vec![1; 40])];
    let output = encode_icns(&with_48).unwrap();
    assert_eq!(output.skipped().len(), 1);
    assert_eq!(output.skipped()[0].index, 1);
    assert_eq!(
        output.encoded().data(),
        encode_icns(&without_48).unwrap().encoded().data()
    );
    assert_eq!(icns_chunks(output.encoded().data()).len(), 1);
}

#[test]
fn icns_five_sizes_in_order() {
    let sizes = [16, 32, 64, 128, 256];
    let images: Vec<RasterImage> = sizes
        .iter()
        .map(|&size| RasterImage::from_png(png_payload(size)).unwrap())
        .collect();
    let encoded = encode_icns(&images).unwrap().into_strict().unwrap();
    assert_eq!(encoded.content_type(), "image/x-icns");
    let chunks = icns_chunks(encoded.data());
    let tags: Vec<&str> = chunks.iter().map(|(tag, _)| tag.as_str()).collect();
    assert_eq!(tags, vec!["icp4", "icp5", "icp6", "ic07", "ic08"]);
    for ((_, length), image) in chunks.iter().zip(images.iter()) {
        assert_eq!(*length as usize, image.payload().len() + 8);
    }
}

#[test]
fn icns_keeps_input_order_rather_than_size_order() {
    let images = vec![
        RasterImage::new(512, 512, vec![1]),
        RasterImage::new(16, 16, vec![2]),
    ];
    let encoded = encode_icns(&images).unwrap().into_encoded();
    let tags: Vec<String> =
        icns_chunks(encoded.data()).into_iter().map(|(tag, _)| tag).collect();
    assert_eq!(tags, vec!["ic09".to_string(), "icp4".to_string()]);
}

//===========================================================================//

#[test]
fn encode_each_format_at_its_render_sizes() {
    for &format in &[IconFormat::Png, IconFormat::Ico, IconFormat::Icns] {
        let images: Vec<RasterImage> = format
            .render_sizes()
            .iter()
            .map(|&size| RasterImage::new(size, size, vec![size as u8; 12]))
            .collect();
        let encoded = iconpack::encode(format, &images).unwrap();
        assert_eq!(encoded.content_type(), format.content_type());
        let expected_len = match format {
            IconFormat::Png => 12,
            IconFormat::Ico => 6 + images.len() * (16 + 12),
            IconFormat::Icns => 8 + images.len() * (8 + 12),
        };
        assert_eq!(encoded.len(), expected_len);
    }
}

//===========================================================================//
