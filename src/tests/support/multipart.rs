//! Hand-built `multipart/form-data` bodies for route tests.

pub const BOUNDARY: &str = "----scena-test-boundary";

pub enum Part<'a> {
    Text {
        name: &'a str,
        value: &'a str,
    },
    File {
        name: &'a str,
        file_name: &'a str,
        content_type: &'a str,
        data: &'a [u8],
    },
}

pub fn content_type() -> String {
    format!("multipart/form-data; boundary={BOUNDARY}")
}

pub fn body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut out = Vec::new();

    for part in parts {
        out.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text { name, value } => {
                out.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
                out.extend_from_slice(value.as_bytes());
            }
            Part::File {
                name,
                file_name,
                content_type,
                data,
            } => {
                out.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n\
                         Content-Type: {content_type}\r\n\r\n"
                    )
                    .as_bytes(),
                );
                out.extend_from_slice(data);
            }
        }
        out.extend_from_slice(b"\r\n");
    }

    out.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    out
}

pub fn file<'a>(content_type: &'a str, data: &'a [u8]) -> Part<'a> {
    Part::File {
        name: "file",
        file_name: "upload.bin",
        content_type,
        data,
    }
}

pub fn product(value: &str) -> Part<'_> {
    Part::Text {
        name: "product_id",
        value,
    }
}
