//! PEM armor for the DER key codecs
//!
//! Standard `-----BEGIN/END <label>-----` blocks with the base64 body
//! wrapped at 64 columns and a trailing newline after the footer. Unwrap
//! tolerates a trailing newline; a header or footer that does not match the
//! requested label is rejected.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::error::{Error, Result};
use crate::params::PEM_LINE_WIDTH;

/// Wrap DER bytes in a PEM block with the given label
pub fn wrap(label: &str, der: &[u8]) -> String {
    let body = BASE64.encode(der);
    let mut out =
        String::with_capacity(body.len() + body.len() / PEM_LINE_WIDTH + 2 * label.len() + 32);
    out.push_str("-----BEGIN ");
    out.push_str(label);
    out.push_str("-----\n");
    for chunk in body.as_bytes().chunks(PEM_LINE_WIDTH) {
        out.push_str(std::str::from_utf8(chunk).expect("base64 output is ASCII"));
        out.push('\n');
    }
    out.push_str("-----END ");
    out.push_str(label);
    out.push_str("-----\n");
    out
}

/// Extract the DER bytes from a PEM block with the given label
pub fn unwrap(label: &str, pem: &str) -> Result<Vec<u8>> {
    let header = format!("-----BEGIN {label}-----");
    let footer = format!("-----END {label}-----");

    let mut lines = pem.lines();
    match lines.next() {
        Some(line) if line == header => {}
        _ => {
            return Err(Error::Pem {
                reason: "missing or mismatched BEGIN header",
            })
        }
    }

    let mut body = String::new();
    let mut saw_footer = false;
    for line in &mut lines {
        if line == footer {
            saw_footer = true;
            break;
        }
        body.push_str(line.trim_end());
    }
    if !saw_footer {
        return Err(Error::Pem {
            reason: "missing or mismatched END footer",
        });
    }
    if lines.any(|rest| !rest.trim().is_empty()) {
        return Err(Error::Pem {
            reason: "unexpected data after END footer",
        });
    }

    BASE64.decode(body.as_bytes()).map_err(|_| Error::Pem {
        reason: "invalid base64 body",
    })
}
