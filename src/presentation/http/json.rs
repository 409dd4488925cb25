// src/presentation/http/json.rs
//! JSON encoding that is safe to embed in HTML.
//!
//! `<`, `>` and `&` are written as `\u003c`, `\u003e` and `\u0026`, and the
//! line/paragraph separators U+2028/U+2029 as `\u2028`/`\u2029`. The output
//! decodes to exactly the same value as plain `serde_json` output.

use serde::Serialize;
use serde_json::ser::Formatter;
use std::io;

struct HtmlSafeFormatter;

impl Formatter for HtmlSafeFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (index, ch) in fragment.char_indices() {
            let escaped = match ch {
                '<' => "\\u003c",
                '>' => "\\u003e",
                '&' => "\\u0026",
                '\u{2028}' => "\\u2028",
                '\u{2029}' => "\\u2029",
                _ => continue,
            };
            writer.write_all(fragment[start..index].as_bytes())?;
            writer.write_all(escaped.as_bytes())?;
            start = index + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

pub fn to_html_safe_vec<T>(value: &T) -> serde_json::Result<Vec<u8>>
where
    T: ?Sized + Serialize,
{
    let mut buf = Vec::with_capacity(128);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, HtmlSafeFormatter);
    value.serialize(&mut serializer)?;
    Ok(buf)
}
