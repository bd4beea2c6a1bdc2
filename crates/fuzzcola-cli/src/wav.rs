//! Planar WAV I/O: one `Vec<f32>` per channel.
//!
//! 32-bit files are written as IEEE float; 16- and 24-bit files as PCM
//! integers, full scale mapped to ±1.0.

use anyhow::{Context, Result};
use hound::{SampleFormat, WavReader, WavWriter};
use std::path::Path;

/// Channel count, rate and bit depth of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavSpec {
    /// Interleaved channel count.
    pub channels: u16,
    /// Frames per second.
    pub sample_rate: u32,
    /// 16, 24 or 32. Only 32 is stored as float.
    pub bits_per_sample: u16,
}

impl WavSpec {
    fn to_hound(self) -> hound::WavSpec {
        let sample_format = match self.bits_per_sample {
            32 => SampleFormat::Float,
            _ => SampleFormat::Int,
        };
        hound::WavSpec {
            channels: self.channels,
            sample_rate: self.sample_rate,
            bits_per_sample: self.bits_per_sample,
            sample_format,
        }
    }
}

/// Value of an integer sample at full scale.
fn full_scale(bits: u16) -> f32 {
    (1u32 << (bits - 1)) as f32
}

/// Read every channel of `path`.
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<(Vec<Vec<f32>>, WavSpec)> {
    let path = path.as_ref();
    let mut reader =
        WavReader::open(path).with_context(|| format!("opening {}", path.display()))?;
    let header = reader.spec();
    let spec = WavSpec {
        channels: header.channels,
        sample_rate: header.sample_rate,
        bits_per_sample: header.bits_per_sample,
    };

    let samples: Vec<f32> = if header.sample_format == SampleFormat::Float {
        reader.samples::<f32>().collect::<Result<_, _>>()?
    } else {
        let scale = full_scale(header.bits_per_sample).recip();
        reader
            .samples::<i32>()
            .map(|s| s.map(|v| v as f32 * scale))
            .collect::<Result<_, _>>()?
    };

    let width = usize::from(header.channels.max(1));
    let planar = (0..width)
        .map(|ch| samples.iter().skip(ch).step_by(width).copied().collect())
        .collect();

    Ok((planar, spec))
}

/// Write `channels` as one file. The channel count comes from `channels`, not
/// from `spec`; frames past the shortest channel are dropped.
pub fn write_wav<P: AsRef<Path>>(path: P, channels: &[Vec<f32>], spec: WavSpec) -> Result<()> {
    let spec = WavSpec {
        channels: u16::try_from(channels.len())?,
        ..spec
    };
    let path = path.as_ref();
    let mut writer = WavWriter::create(path, spec.to_hound())
        .with_context(|| format!("creating {}", path.display()))?;
    let frames = channels.iter().map(Vec::len).min().unwrap_or(0);
    let frame_iter = (0..frames).flat_map(|i| channels.iter().map(move |ch| ch[i]));

    if spec.bits_per_sample == 32 {
        for sample in frame_iter {
            writer.write_sample(sample)?;
        }
    } else {
        let scale = full_scale(spec.bits_per_sample);
        for sample in frame_iter {
            writer.write_sample((sample * scale).clamp(-scale, scale - 1.0) as i32)?;
        }
    }

    writer.finalize()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn spec(channels: u16, bits_per_sample: u16) -> WavSpec {
        WavSpec {
            channels,
            sample_rate: 44100,
            bits_per_sample,
        }
    }

    #[test]
    fn float_stereo_is_lossless() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stereo.wav");
        let left: Vec<f32> = (0..500).map(|i| (i as f32 * 0.013).cos() * 0.7).collect();
        let right: Vec<f32> = left.iter().rev().copied().collect();

        write_wav(&path, &[left.clone(), right.clone()], spec(2, 32)).unwrap();
        let (channels, read_spec) = read_wav(&path).unwrap();

        assert_eq!(read_spec, spec(2, 32));
        assert_eq!(channels, vec![left, right]);
    }

    #[test]
    fn pcm16_within_one_lsb() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mono16.wav");
        let ramp: Vec<f32> = (0..200).map(|i| i as f32 / 100.0 - 1.0).collect();

        write_wav(&path, &[ramp.clone()], spec(1, 16)).unwrap();
        let (channels, read_spec) = read_wav(&path).unwrap();

        assert_eq!(read_spec.bits_per_sample, 16);
        for (written, read) in ramp.iter().zip(&channels[0]) {
            assert!((written - read).abs() <= 1.0 / 32768.0);
        }
    }

    #[test]
    fn pcm24_clips_overs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hot.wav");
        write_wav(&path, &[vec![1.5, -3.0]], spec(1, 24)).unwrap();

        let (channels, _) = read_wav(&path).unwrap();
        assert!(channels[0][0] > 0.9999 && channels[0][0] < 1.0);
        assert_eq!(channels[0][1], -1.0);
    }

    #[test]
    fn uneven_channels_truncate() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("uneven.wav");
        write_wav(&path, &[vec![0.1; 10], vec![0.2; 7]], spec(1, 32)).unwrap();

        let (channels, read_spec) = read_wav(&path).unwrap();
        assert_eq!(read_spec.channels, 2);
        assert_eq!(channels[0].len(), 7);
        assert_eq!(channels[1].len(), 7);
    }

    #[test]
    fn missing_file_names_path() {
        let err = read_wav("/nonexistent/input.wav").unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/input.wav"));
    }
}
