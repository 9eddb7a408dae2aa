use std::io::Cursor;

use symphonia::core::codecs::DecoderOptions;
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::application::ports::AudioTranscoderError;
use crate::domain::AudioMime;

/// Basic stream properties recovered by decoding an audio payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioSummary {
    pub channels: usize,
    pub sample_rate: u32,
    pub frames: u64,
    pub duration_secs: f64,
}

/// Decodes `data` end to end and reports channel count and duration.
pub fn probe_audio(data: &[u8], mime: &AudioMime) -> Result<AudioSummary, AudioTranscoderError> {
    let cursor = Cursor::new(data.to_vec());
    let mss = MediaSourceStream::new(Box::new(cursor), Default::default());

    let mut hint = Hint::new();
    hint.with_extension(mime.extension());
    hint.mime_type(mime.as_mime());

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| AudioTranscoderError::DecodingFailed(format!("probe: {}", e)))?;

    let mut format = probed.format;

    let track = format
        .default_track()
        .ok_or_else(|| AudioTranscoderError::DecodingFailed("no audio track found".to_string()))?;

    let track_id = track.id;
    let codec_params = track.codec_params.clone();
    let mut sample_rate = codec_params.sample_rate.unwrap_or(0);
    let mut channels = codec_params.channels.map(|c| c.count()).unwrap_or(0);

    let mut decoder = symphonia::default::get_codecs()
        .make(&codec_params, &DecoderOptions::default())
        .map_err(|e| AudioTranscoderError::DecodingFailed(format!("codec: {}", e)))?;

    let mut frames: u64 = 0;

    loop {
        let packet = match format.next_packet() {
            Ok(p) => p,
            Err(SymphoniaError::IoError(ref e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                break;
            }
            Err(e) => {
                return Err(AudioTranscoderError::DecodingFailed(format!("packet: {}", e)));
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(d) => d,
            Err(SymphoniaError::DecodeError(e)) => {
                tracing::warn!(error = %e, "Skipping corrupt audio frame");
                continue;
            }
            Err(e) => {
                return Err(AudioTranscoderError::DecodingFailed(format!("decode: {}", e)));
            }
        };

        let spec = *decoded.spec();
        sample_rate = spec.rate;
        channels = spec.channels.count();
        frames += decoded.frames() as u64;
    }

    if frames == 0 || sample_rate == 0 {
        return Err(AudioTranscoderError::DecodingFailed(
            "no audio frames decoded".to_string(),
        ));
    }

    Ok(AudioSummary {
        channels,
        sample_rate,
        frames,
        duration_secs: frames as f64 / sample_rate as f64,
    })
}
