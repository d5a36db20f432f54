mod wav;

pub use wav::{SampleDepth, WavCarrier, WavHeader, WAV_HEADER_LEN};
