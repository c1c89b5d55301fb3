//! Pipeline driving the saliency computation end-to-end.
//!
//! Typical usage:
//! ```no_run
//! use saliency_detector::image::ImageRgbF32;
//! use saliency_detector::{SaliencyDetector, SaliencyParams};
//!
//! # fn example(image: ImageRgbF32) {
//! let detector = SaliencyDetector::new(SaliencyParams::default());
//! let result = detector.process(&image).unwrap();
//! println!("peak saliency: {:.3}", result.saliency.peak());
//! # }
//! ```
use super::params::SaliencyParams;
use crate::channels::{extract_channels, luma_grayscale};
use crate::conspicuity::normalize::peak_normalize;
use crate::conspicuity::{
    addition, center_surround_opponent, center_surround_self, REFERENCE_PAIR, SCALE_PAIRS,
};
use crate::diagnostics::{
    ChannelStage, ConspicuityStage, GaborStage, InputDescriptor, PipelineTrace, PyramidStage,
    SaliencyReport, TimingBreakdown,
};
use crate::gabor::{apply_bank, gabor_bank, orientation_angles};
use crate::image::{resize_bilinear, ImageF32, ImageRgbF32};
use crate::pyramid::filters::GAUSSIAN_5TAP;
use crate::pyramid::Pyramid;
use crate::types::SaliencyResult;
use log::debug;
use rayon::prelude::*;
use std::time::Instant;

/// Saliency detector: channels → Gabor bank → pyramids → center-surround →
/// peak normalization → cross-feature combination.
pub struct SaliencyDetector {
    params: SaliencyParams,
}

impl SaliencyDetector {
    /// Create a detector with the supplied parameters.
    pub fn new(params: SaliencyParams) -> Self {
        Self { params }
    }

    /// Run the pipeline, returning the computed maps.
    pub fn process(&self, image: &ImageRgbF32) -> Result<SaliencyResult, String> {
        Ok(self.process_with_diagnostics(image)?.result)
    }

    /// Run the pipeline and return both the maps and a detailed trace.
    pub fn process_with_diagnostics(
        &self,
        image: &ImageRgbF32,
    ) -> Result<SaliencyReport, String> {
        let (width, height) = (image.width(), image.height());
        if width == 0 || height == 0 {
            return Err(format!("Invalid input image: {width}x{height} pixels"));
        }
        let levels = self.params.pyramid_levels;
        let deepest_surround = SCALE_PAIRS
            .iter()
            .map(|&(_, s)| s)
            .max()
            .expect("catalog is non-empty");
        if levels <= deepest_surround {
            return Err(format!(
                "pyramid_levels={levels} too shallow for surround level {deepest_surround}"
            ));
        }

        debug!(
            "SaliencyDetector::process start w={} h={} levels={}",
            width, height, levels
        );
        let total_start = Instant::now();

        // Feature channels.
        let channel_start = Instant::now();
        let channels = extract_channels(image);
        let grayscale = luma_grayscale(image);
        let channels_ms = channel_start.elapsed().as_secs_f64() * 1000.0;
        let channel_stage = ChannelStage {
            elapsed_ms: channels_ms,
            intensity_peak: channels.intensity.peak(),
            gate_threshold: channels.gate_threshold,
        };

        // Orientation energy.
        let gabor_start = Instant::now();
        let gabor_kernels = gabor_bank(&self.params.gabor);
        let orientation_energy = apply_bank(&grayscale, &gabor_kernels);
        let gabor_ms = gabor_start.elapsed().as_secs_f64() * 1000.0;
        let gabor_stage = GaborStage {
            elapsed_ms: gabor_ms,
            kernel_size: self.params.gabor.kernel_size,
            orientations_deg: orientation_angles()
                .iter()
                .map(|a| a.to_degrees())
                .collect(),
        };

        // Pyramids; the channels are mutually independent, so they build in
        // parallel.
        let pyramid_start = Instant::now();
        let feature_planes = vec![
            channels.red,
            channels.green,
            channels.blue,
            channels.yellow,
            channels.intensity,
        ];
        let feature_pyramids: Vec<Pyramid> = feature_planes
            .into_par_iter()
            .map(|plane| Pyramid::build_with(plane, levels, &GAUSSIAN_5TAP))
            .collect();
        let [red_pyr, green_pyr, blue_pyr, yellow_pyr, intensity_pyr]: [Pyramid; 5] =
            feature_pyramids
                .try_into()
                .expect("five feature pyramids");
        let orientation_pyramids: Vec<Pyramid> = orientation_energy
            .par_iter()
            .map(|plane| Pyramid::build_with(plane.clone(), levels, &GAUSSIAN_5TAP))
            .collect();
        let pyramids_ms = pyramid_start.elapsed().as_secs_f64() * 1000.0;
        let pyramid_stage = PyramidStage::from_pyramid(&intensity_pyr, pyramids_ms);

        // Center-surround differences over the fixed catalog.
        let cs_start = Instant::now();
        let intensity_cs = center_surround_self(&intensity_pyr);
        let rg_cs = center_surround_opponent(&red_pyr, &green_pyr);
        let by_cs = center_surround_opponent(&blue_pyr, &yellow_pyr);
        let orientation_cs: Vec<Vec<ImageF32>> = orientation_pyramids
            .par_iter()
            .map(center_surround_self)
            .collect();
        let cs_ms = cs_start.elapsed().as_secs_f64() * 1000.0;
        let raw_maps = intensity_cs.len()
            + rg_cs.len()
            + by_cs.len()
            + orientation_cs.iter().map(Vec::len).sum::<usize>();
        debug!("SaliencyDetector::process raw conspicuity maps={}", raw_maps);

        // Peak-contrast normalization of every raw map.
        let norm_start = Instant::now();
        let intensity_cs: Vec<ImageF32> = intensity_cs.iter().map(peak_normalize).collect();
        let rg_cs: Vec<ImageF32> = rg_cs.iter().map(peak_normalize).collect();
        let by_cs: Vec<ImageF32> = by_cs.iter().map(peak_normalize).collect();
        let orientation_cs: Vec<Vec<ImageF32>> = orientation_cs
            .par_iter()
            .map(|maps| maps.iter().map(peak_normalize).collect())
            .collect();
        let normalize_ms = norm_start.elapsed().as_secs_f64() * 1000.0;

        // Per-feature combination at the reference resolution.
        let combine_start = Instant::now();
        let reference = &intensity_cs[REFERENCE_PAIR];
        let (ref_w, ref_h) = (reference.w, reference.h);

        let ibar = addition(&intensity_cs, ref_w, ref_h);
        let color_sums: Vec<ImageF32> = rg_cs
            .iter()
            .zip(by_cs.iter())
            .map(|(rg, by)| add_planes(rg, by))
            .collect();
        let cbar = addition(&color_sums, ref_w, ref_h);
        let mut obar = ImageF32::new(ref_w, ref_h);
        for maps in &orientation_cs {
            accumulate(&mut obar, &peak_normalize(&addition(maps, ref_w, ref_h)));
        }

        let mut combined = peak_normalize(&ibar);
        accumulate(&mut combined, &peak_normalize(&cbar));
        accumulate(&mut combined, &peak_normalize(&obar));
        for v in combined.data.iter_mut() {
            *v /= 3.0;
        }
        let saliency = resize_bilinear(&combined, width, height);
        let combine_ms = combine_start.elapsed().as_secs_f64() * 1000.0;

        let conspicuity_stage = ConspicuityStage {
            center_surround_ms: cs_ms,
            normalize_ms,
            combine_ms,
            raw_maps,
            intensity_peak: ibar.peak(),
            color_peak: cbar.peak(),
            orientation_peak: obar.peak(),
        };

        let latency = total_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "SaliencyDetector::process done peak={:.4} latency_ms={:.3}",
            saliency.peak(),
            latency
        );

        let mut timings = TimingBreakdown::with_total(latency);
        timings.push("channels", channels_ms);
        timings.push("gabor", gabor_ms);
        timings.push("pyramids", pyramids_ms);
        timings.push("center_surround", cs_ms);
        timings.push("normalize", normalize_ms);
        timings.push("combine", combine_ms);

        let trace = PipelineTrace {
            input: InputDescriptor {
                width,
                height,
                pyramid_levels: levels,
            },
            timings,
            channels: channel_stage,
            gabor: gabor_stage,
            pyramid: pyramid_stage,
            conspicuity: conspicuity_stage,
        };

        let result = SaliencyResult {
            saliency,
            grayscale,
            orientation_energy,
            gabor_kernels,
            latency_ms: latency,
        };

        Ok(SaliencyReport { result, trace })
    }
}

fn add_planes(a: &ImageF32, b: &ImageF32) -> ImageF32 {
    assert_eq!((a.w, a.h), (b.w, b.h), "plane sizes must match");
    let mut out = ImageF32::new(a.w, a.h);
    for ((dst, &x), &y) in out.data.iter_mut().zip(a.data.iter()).zip(b.data.iter()) {
        *dst = x + y;
    }
    out
}

fn accumulate(dst: &mut ImageF32, src: &ImageF32) {
    debug_assert_eq!((dst.w, dst.h), (src.w, src.h));
    for (d, &s) in dst.data.iter_mut().zip(src.data.iter()) {
        *d += s;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_rgb(w: usize, h: usize, rgb: [f32; 3]) -> ImageRgbF32 {
        ImageRgbF32::from_planes(
            ImageF32::from_vec(w, h, vec![rgb[0]; w * h]),
            ImageF32::from_vec(w, h, vec![rgb[1]; w * h]),
            ImageF32::from_vec(w, h, vec![rgb[2]; w * h]),
        )
    }

    #[test]
    fn empty_input_fails_fast() {
        let detector = SaliencyDetector::new(SaliencyParams::default());
        let err = detector.process(&solid_rgb(0, 0, [0.0; 3])).unwrap_err();
        assert!(err.contains("Invalid input image"), "err={err}");
    }

    #[test]
    fn shallow_pyramid_config_is_rejected() {
        let params = SaliencyParams {
            pyramid_levels: 4,
            ..Default::default()
        };
        let detector = SaliencyDetector::new(params);
        let err = detector.process(&solid_rgb(8, 8, [0.5; 3])).unwrap_err();
        assert!(err.contains("too shallow"), "err={err}");
    }

    #[test]
    fn one_pixel_image_is_degenerate_but_defined() {
        let detector = SaliencyDetector::new(SaliencyParams::default());
        let result = detector.process(&solid_rgb(1, 1, [0.2, 0.4, 0.6])).unwrap();
        assert_eq!((result.saliency.w, result.saliency.h), (1, 1));
        assert!(result.saliency.data[0].is_finite());
        assert_eq!(result.orientation_energy.len(), 4);
        assert_eq!(result.gabor_kernels.len(), 4);
    }

    #[test]
    fn saliency_matches_input_resolution() {
        let detector = SaliencyDetector::new(SaliencyParams::default());
        let result = detector.process(&solid_rgb(50, 30, [0.5; 3])).unwrap();
        assert_eq!((result.saliency.w, result.saliency.h), (50, 30));
        // Full convolution grows each orientation plane by kernel_size - 1.
        assert_eq!(result.orientation_energy[0].w, 50 + 15);
        assert_eq!(result.orientation_energy[0].h, 30 + 15);
    }
}
