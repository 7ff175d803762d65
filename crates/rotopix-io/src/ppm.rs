//! PPM (Portable Pixmap) decoding
//!
//! Reads a textual header of four tokens (format tag, width, height, max
//! value) followed by raw RGB triplets. The header is tokenized on
//! whitespace and `#` comments; the payload is anchored to the *end* of the
//! stream, so any amount of whitespace between header and payload is
//! tolerated.
//!
//! The max value is parsed for header compatibility only. Samples are
//! copied verbatim and assumed to already be in 0-255; no scaling is done.
//!
//! # Format
//!
//! ```text
//! P6            <- format tag (not validated)
//! # comment     <- comments run from '#' to the end of the line
//! 640 480       <- width, height (positive integers)
//! 255           <- max value (parsed, unused)
//! RGBRGBRGB...  <- last width*height*3 bytes of the stream
//! ```

use crate::{IoError, IoResult};
use rotopix_core::{CHANNELS, PixelBuffer, PixelBufferMut, color};
use std::io::Read;
use tracing::debug;

/// Bytes per payload pixel (R, G, B).
const PAYLOAD_CHANNELS: usize = 3;

/// Parsed PPM header fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PpmHeader {
    /// Format identifier, e.g. `P6` (Latin-1 decoded, not validated)
    pub format: String,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Declared max color value (unused for scaling)
    pub max_value: u32,
    /// Byte offset just past the last header token
    pub header_end: usize,
    /// Byte offset where the raw payload begins
    pub payload_offset: usize,
}

impl PpmHeader {
    /// Number of payload bytes (`width * height * 3`).
    pub fn payload_len(&self) -> usize {
        self.width as usize * self.height as usize * PAYLOAD_CHANNELS
    }
}

/// Header whitespace: the Latin-1 subset of JavaScript's `\s`.
#[inline]
fn is_separator(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r' | 0xa0)
}

/// A header token and the offset one past its last byte.
struct Token<'a> {
    bytes: &'a [u8],
    end: usize,
}

/// Splits a byte stream on whitespace runs and `#` comments.
///
/// A comment starts at `#` (even in the middle of a token) and runs to the
/// end of its line. Empty tokens are never produced.
struct Tokens<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Tokens<'a> {
    fn new(data: &'a [u8], pos: usize) -> Self {
        Self { data, pos }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let data = self.data;
        while self.pos < data.len() {
            match data[self.pos] {
                b'#' => {
                    while self.pos < data.len() && data[self.pos] != b'\n' {
                        self.pos += 1;
                    }
                }
                b if is_separator(b) => self.pos += 1,
                _ => break,
            }
        }
        if self.pos >= data.len() {
            return None;
        }

        let start = self.pos;
        while self.pos < data.len() && data[self.pos] != b'#' && !is_separator(data[self.pos]) {
            self.pos += 1;
        }
        Some(Token {
            bytes: &data[start..self.pos],
            end: self.pos,
        })
    }
}

fn latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

fn parse_uint(bytes: &[u8]) -> Option<u32> {
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    std::str::from_utf8(bytes).ok()?.parse().ok()
}

fn parse_dimension(token: &Token<'_>, tokens: usize, name: &str) -> IoResult<u32> {
    match parse_uint(token.bytes) {
        Some(v) if v > 0 => Ok(v),
        _ => Err(IoError::malformed(
            tokens,
            format!("{name} {:?} is not a positive integer", latin1(token.bytes)),
        )),
    }
}

/// Parse the PPM header and locate the payload.
///
/// # Errors
///
/// - [`IoError::MalformedHeader`] if fewer than four usable tokens precede
///   the payload, or a dimension is not a positive integer
/// - [`IoError::TruncatedPayload`] if the stream is too short to hold the
///   declared payload after the header and one separator byte
/// - [`IoError::InvalidData`] if `width * height * 3` overflows
pub fn read_header(data: &[u8]) -> IoResult<PpmHeader> {
    let mut tokens = Tokens::new(data, 0);

    let format = tokens
        .next()
        .ok_or_else(|| IoError::malformed(0, "missing format identifier"))?;
    let width_tok = tokens
        .next()
        .ok_or_else(|| IoError::malformed(1, "missing width"))?;
    let height_tok = tokens
        .next()
        .ok_or_else(|| IoError::malformed(2, "missing height"))?;

    let width = parse_dimension(&width_tok, 1, "width")?;
    let height = parse_dimension(&height_tok, 2, "height")?;

    let payload_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(PAYLOAD_CHANNELS))
        .ok_or_else(|| {
            IoError::InvalidData(format!("payload size overflows for {width}x{height}"))
        })?;

    // The payload is the tail of the stream; it may not reach into the header.
    let truncated = |header_end: usize| IoError::TruncatedPayload {
        expected: payload_len,
        actual: data.len().saturating_sub(header_end),
    };
    let payload_offset = data
        .len()
        .checked_sub(payload_len)
        .filter(|&offset| offset >= height_tok.end)
        .ok_or_else(|| truncated(height_tok.end))?;

    // A max value starting inside the payload region is not a header token.
    let max_tok = Tokens::new(data, height_tok.end)
        .next()
        .filter(|tok| tok.end - tok.bytes.len() < payload_offset)
        .ok_or_else(|| IoError::malformed(3, "missing max value before payload"))?;
    // At least one separator byte must follow the max value.
    if payload_offset <= max_tok.end {
        return Err(truncated(max_tok.end + 1));
    }
    let max_value = parse_uint(max_tok.bytes).ok_or_else(|| {
        IoError::malformed(
            3,
            format!("max value {:?} is not an integer", latin1(max_tok.bytes)),
        )
    })?;

    Ok(PpmHeader {
        format: latin1(format.bytes),
        width,
        height,
        max_value,
        header_end: max_tok.end,
        payload_offset,
    })
}

/// Decode a raw PPM byte stream into an opaque RGBA buffer.
///
/// Pixel `p` receives payload bytes `3p`, `3p + 1`, `3p + 2` as its R, G, B
/// channels; alpha is always 255.
///
/// # Errors
///
/// See [`read_header`]. On error no buffer is produced.
#[tracing::instrument(level = "debug", skip(data), fields(len = data.len()))]
pub fn decode(data: &[u8]) -> IoResult<PixelBuffer> {
    let header = read_header(data)?;
    debug!(
        format = %header.format,
        width = header.width,
        height = header.height,
        max_value = header.max_value,
        "parsed PPM header"
    );

    let payload = &data[header.payload_offset..];
    let mut buffer = PixelBufferMut::new(header.width, header.height)?;
    for (dst, rgb) in buffer
        .data_mut()
        .chunks_exact_mut(CHANNELS)
        .zip(payload.chunks_exact(PAYLOAD_CHANNELS))
    {
        color::write_rgb(dst, rgb[0], rgb[1], rgb[2]);
    }
    Ok(buffer.into())
}

/// Read a whole PPM stream from `reader` and decode it.
///
/// # Arguments
/// * `reader` - Any reader yielding the raw file bytes
pub fn read_ppm<R: Read>(mut reader: R) -> IoResult<PixelBuffer> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    decode(&data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(data: &[u8]) -> Vec<String> {
        Tokens::new(data, 0).map(|t| latin1(t.bytes)).collect()
    }

    #[test]
    fn test_tokenize_whitespace_runs() {
        assert_eq!(tokens(b"  P6\t\t2\r\n3  255 "), ["P6", "2", "3", "255"]);
    }

    #[test]
    fn test_tokenize_comments_run_to_end_of_line() {
        assert_eq!(tokens(b"P6 #c 9 9\n1 1 255"), ["P6", "1", "1", "255"]);
        assert_eq!(tokens(b"P6#x\n#y\n\n4"), ["P6", "4"]);
    }

    #[test]
    fn test_tokenize_nbsp_and_vertical_tab() {
        assert_eq!(tokens(b"P6\xa02\x0b3\x0c255"), ["P6", "2", "3", "255"]);
    }

    #[test]
    fn test_read_header() {
        let mut data = b"P6\n# made by hand\n2 1\n255\n".to_vec();
        data.extend_from_slice(&[1, 2, 3, 4, 5, 6]);

        let header = read_header(&data).unwrap();
        assert_eq!(header.format, "P6");
        assert_eq!((header.width, header.height), (2, 1));
        assert_eq!(header.max_value, 255);
        assert_eq!(header.payload_len(), 6);
        assert_eq!(header.payload_offset, data.len() - 6);
        assert_eq!(&data[header.header_end - 3..header.header_end], b"255");
    }

    #[test]
    fn test_format_tag_not_validated() {
        let mut data = b"XYZ 1 1 15\n".to_vec();
        data.extend_from_slice(&[9, 9, 9]);
        let header = read_header(&data).unwrap();
        assert_eq!(header.format, "XYZ");
        assert_eq!(header.max_value, 15);
    }

    #[test]
    fn test_missing_tokens() {
        for (data, found) in [
            (&b""[..], 0),
            (&b"P6"[..], 1),
            (&b"P6 2"[..], 2),
            (&b"   # only\n"[..], 0),
        ] {
            match read_header(data) {
                Err(IoError::MalformedHeader { tokens, .. }) => assert_eq!(tokens, found),
                other => panic!("expected MalformedHeader, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_max_value_must_precede_payload() {
        // Only three tokens ahead of the 12 payload bytes.
        let mut data = b"P6 2 2".to_vec();
        data.extend_from_slice(b"ABCDEFGHIJKL");
        assert!(matches!(
            read_header(&data),
            Err(IoError::MalformedHeader { tokens: 3, .. })
        ));
    }

    #[test]
    fn test_bad_dimensions() {
        let mut data = b"P6 0 2 255\n".to_vec();
        data.extend_from_slice(&[0; 6]);
        assert!(matches!(
            read_header(&data),
            Err(IoError::MalformedHeader { tokens: 1, .. })
        ));

        assert!(matches!(
            read_header(b"P6 2 x2 255\n\0\0\0\0\0\0"),
            Err(IoError::MalformedHeader { tokens: 2, .. })
        ));
        assert!(matches!(
            read_header(b"P6 1 1 max\n\0\0\0"),
            Err(IoError::MalformedHeader { tokens: 3, .. })
        ));
    }

    #[test]
    fn test_truncated_payload() {
        let data = b"P6 2 2 255\n\x01\x02\x03";
        match read_header(data) {
            Err(IoError::TruncatedPayload { expected, actual }) => {
                assert_eq!(expected, 12);
                assert_eq!(actual, data.len() - b"P6 2 2".len());
            }
            other => panic!("expected TruncatedPayload, got {other:?}"),
        }
    }

    #[test]
    fn test_payload_short_by_a_few_bytes() {
        // 11 of 12 bytes: the header newline would become the first sample.
        let mut data = b"P6 2 2 255\n".to_vec();
        data.extend(1..=11u8);
        match decode(&data) {
            Err(IoError::TruncatedPayload { expected, actual }) => {
                assert_eq!(expected, 12);
                assert_eq!(actual, 11);
            }
            other => panic!("expected TruncatedPayload, got {other:?}"),
        }

        let mut data = b"P6 2 2 255\n".to_vec();
        data.extend(1..=10u8);
        assert!(matches!(
            decode(&data),
            Err(IoError::TruncatedPayload { expected: 12, actual: 10 })
        ));
    }

    #[test]
    fn test_payload_overlapping_max_value() {
        // The payload would take "55" of the max value.
        assert!(matches!(
            decode(b"P6 1 1 255\x07"),
            Err(IoError::TruncatedPayload { expected: 3, .. })
        ));
        // No separator between max value and payload.
        assert!(matches!(
            decode(b"P6 1 1 255\x07\x08\x09"),
            Err(IoError::TruncatedPayload { expected: 3, actual: 0 })
        ));
    }

    #[test]
    fn test_payload_after_single_separator() {
        let buffer = decode(b"P6 1 1 255 \x07\x08\x09").unwrap();
        assert_eq!(buffer.data(), &[7, 8, 9, 255]);
    }

    #[test]
    fn test_payload_overflow() {
        if usize::BITS == 32 {
            assert!(matches!(
                read_header(b"P6 4294967295 4294967295 255\n"),
                Err(IoError::InvalidData(_))
            ));
        }
    }

    #[test]
    fn test_decode_copies_bytes_verbatim() {
        let mut data = b"P6\n2 1\n255\n".to_vec();
        // High bytes must not be re-encoded.
        data.extend_from_slice(&[0xff, 0x80, 0x00, 0x0a, 0x20, 0x23]);

        let buffer = decode(&data).unwrap();
        assert_eq!(buffer.data(), &[0xff, 0x80, 0x00, 255, 0x0a, 0x20, 0x23, 255]);
    }

    #[test]
    fn test_read_ppm_from_reader() {
        let mut data = b"P6 1 1 255\n".to_vec();
        data.extend_from_slice(&[7, 8, 9]);
        let buffer = read_ppm(std::io::Cursor::new(data)).unwrap();
        assert_eq!(buffer.get_rgba(0, 0), Some([7, 8, 9, 255]));
    }
}
