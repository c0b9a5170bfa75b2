use std::{fs::File, io::BufReader, path::Path};

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, cpal::BufferSize};

use crate::audio::error::AudioError;

pub fn construct_sink() -> Result<(OutputStream, Sink), AudioError> {
    let stream = OutputStreamBuilder::from_default_device()
        .map_err(|e| AudioError::Device(e.to_string()))?
        .with_buffer_size(BufferSize::Fixed(4096))
        .open_stream_or_fallback()
        .map_err(|e| AudioError::Device(e.to_string()))?;
    let sink = Sink::connect_new(stream.mixer());

    Ok((stream, sink))
}

pub fn open_source(path: &Path) -> Result<Decoder<BufReader<File>>, AudioError> {
    let file = File::open(path)
        .map_err(|e| AudioError::SourceUnavailable(format!("{}: {e}", path.display())))?;
    let byte_len = file
        .metadata()
        .map_err(|e| AudioError::SourceUnavailable(e.to_string()))?
        .len();

    let mut builder = Decoder::builder()
        .with_data(BufReader::new(file))
        .with_byte_len(byte_len)
        .with_seekable(true)
        .with_gapless(true);
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        builder = builder.with_hint(ext);
    }

    builder.build().map_err(|e| AudioError::Decode(e.to_string()))
}
