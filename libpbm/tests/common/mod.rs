use libpbm::BitmapHeader;

/// Builds a binary PBM file with the given comment lines and payload
pub fn pbm_bytes(comments: &[&str], width: u32, height: u32, payload: &[u8]) -> Vec<u8> {
    let header = BitmapHeader::builder()
        .width(width)
        .height(height)
        .comments(comments.iter().map(|c| (*c).to_owned()).collect())
        .build();
    let mut bytes = header.to_header_format().into_bytes();
    bytes.extend_from_slice(payload);
    bytes
}

/// Returns the lines between `= {` and `};` of a generated array
pub fn body_lines(generated: &str) -> Vec<&str> {
    generated
        .lines()
        .skip_while(|line| !line.ends_with("= {"))
        .skip(1)
        .take_while(|line| *line != "};")
        .collect()
}
