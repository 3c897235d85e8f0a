/// JSONレスポンスボディのシリアライズ
///
/// 区切り文字に`", "`と`": "`を使う1行JSONを出力する。
/// ヘルスチェックのボディは`{"status": "API Available"}`と完全一致する必要がある。
use std::io;

use serde::Serialize;
use serde_json::ser::Formatter;

/// 区切り文字の後に空白を1つ入れる1行フォーマッタ
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// 値をレスポンスボディ用のJSON文字列に変換
pub fn to_json_body<T>(value: &T) -> Result<String, serde_json::Error>
where
    T: ?Sized + Serialize,
{
    let mut buf = Vec::with_capacity(128);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    value.serialize(&mut serializer)?;

    // serde_jsonは常に有効なUTF-8を出力する
    String::from_utf8(buf).map_err(|err| <serde_json::Error as serde::ser::Error>::custom(err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_single_key_object() {
        let body = to_json_body(&json!({ "status": "API Available" })).unwrap();
        assert_eq!(body, r#"{"status": "API Available"}"#);
    }

    #[test]
    fn test_nested_values() {
        let body = to_json_body(&json!({ "a": [1, 2, 3], "b": { "c": null } })).unwrap();
        assert_eq!(body, r#"{"a": [1, 2, 3], "b": {"c": null}}"#);
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(to_json_body(&json!({})).unwrap(), "{}");
        assert_eq!(to_json_body(&json!([])).unwrap(), "[]");
    }

    #[test]
    fn test_output_parses_back_to_same_value() {
        let value = json!({ "error": "not_found", "message": "No route for GET /x, sorry: really" });
        let body = to_json_body(&value).unwrap();

        let parsed: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed, value);
    }
}
