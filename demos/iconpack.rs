//! Packs PNG files into ICO/ICNS icon files, and lists the contents of
//! existing ones.
//!
//! ```shell
//! cargo run --example iconpack -- create -f icns -o out.icns 16.png 32.png
//! cargo run --example iconpack -- list out.icns
//! ```

use clap::{App, Arg, SubCommand};
use iconpack::{IcnsFamily, IcoDirectory, IconFormat, RasterImage};
use std::fs;
use std::path::PathBuf;

//===========================================================================//

fn main() {
    let matches = App::new("iconpack")
        .version("0.1")
        .about("Packs PNG images into ICO and ICNS files")
        .subcommand(
            SubCommand::with_name("create")
                .about("Creates an icon file from PNG files")
                .arg(
                    Arg::with_name("format")
                        .takes_value(true)
                        .value_name("FORMAT")
                        .short("f")
                        .long("format")
                        .possible_values(&["png", "ico", "icns"])
                        .help("Sets output format (default: from path)"),
                )
                .arg(
                    Arg::with_name("output")
                        .takes_value(true)
                        .value_name("PATH")
                        .short("o")
                        .long("output")
                        .help("Sets output path"),
                )
                .arg(
                    Arg::with_name("strict")
                        .long("strict")
                        .help("Fails instead of dropping unsupported sizes"),
                )
                .arg(Arg::with_name("image").multiple(true).required(true)),
        )
        .subcommand(
            SubCommand::with_name("list")
                .about("Lists images in an ICO or ICNS file")
                .arg(Arg::with_name("file").required(true)),
        )
        .get_matches();
    if let Some(submatches) = matches.subcommand_matches("create") {
        let output = submatches.value_of("output").map(PathBuf::from);
        let format = match submatches.value_of("format") {
            Some(format) => format.parse::<IconFormat>().unwrap(),
            None => output
                .as_ref()
                .and_then(|path| path.extension())
                .and_then(|ext| ext.to_str())
                .and_then(IconFormat::from_extension)
                .unwrap_or(IconFormat::Ico),
        };
        let out_path = output.unwrap_or_else(|| {
            let mut path = PathBuf::from(format!("out.{}", format));
            let mut index: i32 = 0;
            while path.exists() {
                index += 1;
                path = PathBuf::from(format!("out{}.{}", index, format));
            }
            path
        });
        let mut images = Vec::new();
        for path in submatches.values_of("image").into_iter().flatten() {
            let file = fs::File::open(path).unwrap();
            let image = RasterImage::read_png(file).unwrap();
            println!(
                "Adding {:?} ({}x{})",
                path,
                image.width(),
                image.height()
            );
            images.push(image);
        }
        let encoded = if format == IconFormat::Icns {
            let output = iconpack::encode_icns(&images).unwrap();
            for skipped in output.skipped() {
                println!(
                    "Skipping image {} ({}x{}): unsupported ICNS size",
                    skipped.index, skipped.width, skipped.height
                );
            }
            if submatches.is_present("strict") {
                output.into_strict().unwrap()
            } else {
                output.into_encoded()
            }
        } else {
            iconpack::encode(format, &images).unwrap()
        };
        fs::write(&out_path, encoded.data()).unwrap();
        println!("Wrote {} bytes to {:?}", encoded.len(), out_path);
    } else if let Some(submatches) = matches.subcommand_matches("list") {
        let path = submatches.value_of("file").unwrap();
        let data = fs::read(path).unwrap();
        if data.starts_with(b"icns") {
            let family = IcnsFamily::read(data.as_slice()).unwrap();
            for (index, chunk) in family.chunks().iter().enumerate() {
                let size = match chunk.icns_type() {
                    Some(icon_type) => {
                        format!("{}x{}", icon_type.size(), icon_type.size())
                    }
                    None => "-".to_string(),
                };
                println!(
                    "{:5}: {} {:>9}, {} bytes",
                    index,
                    chunk.ostype(),
                    size,
                    chunk.payload().len()
                );
            }
        } else {
            let directory =
                IcoDirectory::read(std::io::Cursor::new(&data)).unwrap();
            let entries = directory.entries().to_vec();
            let images = directory.into_images();
            for (index, (entry, image)) in
                entries.iter().zip(images.iter()).enumerate()
            {
                let kind = if image.is_png() { "PNG" } else { "BMP" };
                println!(
                    "{:5}: {}x{} {}, {} bytes at offset {}",
                    index,
                    entry.width(),
                    entry.height(),
                    kind,
                    entry.data_size(),
                    entry.data_offset()
                );
            }
        }
    }
}

//===========================================================================//
