use anyhow::Result;
use itertools::iproduct;
use ndarray::{Array, Array3};
use rand::prelude::*;
use seg_augment::{ScaleJitter, ScaleJitterConfig};
use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

lazy_static::lazy_static! {
    static ref CONFIG_DIR: PathBuf = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("cfg");
}

fn load_processor(file_name: &str) -> Result<ScaleJitter<u8>> {
    let _ = pretty_env_logger::try_init();
    let config = ScaleJitterConfig::open(CONFIG_DIR.join(file_name))?;
    let processor = config.to_init()?.build()?;
    Ok(processor)
}

#[test]
fn fixed_scale_config_test() -> Result<()> {
    let processor = load_processor("fixed_scale.json5")?;
    assert_eq!(processor.output_size().hw(), [4, 4]);
    assert_eq!(processor.scale_range(), (1.0, 1.0));

    let image = Array3::<f32>::ones((4, 4, 3));
    let annotation = Array3::<u8>::zeros((4, 4, 1));
    let (out_image, out_annotation) = processor.forward(&image, &annotation)?;

    assert_eq!(out_image, image);
    assert_eq!(out_annotation, annotation);
    Ok(())
}

#[test]
fn output_size_is_fixed_for_any_input() -> Result<()> {
    let processor = load_processor("voc_train.json5")?;
    let mut rng = StdRng::seed_from_u64(2022);

    iproduct!([3, 17, 32, 75], [8, 48, 101])
        .chain([(1, 1)])
        .try_for_each(|(h, w)| -> Result<_> {
            let image = Array::from_shape_fn((h, w, 3), |(y, x, c)| ((y + x + c) % 256) as u8);
            let annotation = Array::from_shape_fn((h, w, 1), |(y, x, _)| ((y * 3 + x) % 21) as u8);
            let classes: HashSet<u8> = annotation.iter().cloned().collect();

            for _ in 0..4 {
                let (out_image, out_annotation) =
                    processor.forward_with_rng(&mut rng, &image, &annotation)?;
                assert_eq!(out_image.dim(), (32, 48, 3));
                assert_eq!(out_annotation.dim(), (32, 48, 1));
                assert!(out_annotation
                    .iter()
                    .all(|class| *class == 255 || classes.contains(class)));
            }

            Ok(())
        })?;

    Ok(())
}

#[test]
fn padded_pixels_match_masked_labels() -> Result<()> {
    let processor = load_processor("voc_train.json5")?;
    let mut rng = StdRng::seed_from_u64(7);

    // non-zero image and no class 255, so zero pixels and masked labels mark padding alike
    let image = Array3::<u8>::from_elem((20, 20, 1), 9);
    let annotation = Array::from_shape_fn((20, 20, 1), |(y, x, _)| ((y + x) % 3) as u8);

    for _ in 0..16 {
        let (out_image, out_annotation) =
            processor.forward_with_rng(&mut rng, &image, &annotation)?;
        out_image
            .iter()
            .zip(out_annotation.iter())
            .for_each(|(&pixel, &class)| {
                assert_eq!(pixel == 0, class == 255);
            });
    }

    Ok(())
}

#[test]
fn center_block_scenario() -> Result<()> {
    let config = ScaleJitterConfig::from_json5_str(
        "{ output_size: { h: 4, w: 4 }, scale: [0.5, 0.5], mask_out_number: 255 }",
    )?;
    let processor = config.to_init::<i32>()?.build()?;

    let image = Array3::<f32>::ones((2, 2, 1));
    let annotation = Array3::<i32>::ones((2, 2, 1));
    let (_out_image, out_annotation) = processor.forward(&image, &annotation)?;

    let expect = ndarray::arr3(&[
        [[255], [255], [255], [255]],
        [[255], [1], [1], [255]],
        [[255], [1], [1], [255]],
        [[255], [255], [255], [255]],
    ]);
    assert_eq!(out_annotation, expect);
    Ok(())
}
