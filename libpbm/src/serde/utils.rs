use nom::{
    character::complete::{digit1, multispace0, multispace1},
    combinator::{all_consuming, map_res, verify},
    sequence::{delimited, separated_pair},
    IResult,
};

/// Strips surrounding ASCII whitespace (including `\r\n`) from a header line
pub fn trim_line(line: &[u8]) -> &[u8] {
    line.trim_ascii()
}

fn parse_positive_u32(input: &str) -> IResult<&str, u32> {
    verify(map_res(digit1, |d: &str| d.parse::<u32>()), |n: &u32| *n > 0)(input)
}

/// Parses a dimensions line of the form `<width> <height>`
///
/// Leading and trailing whitespace is allowed, any other content is not.
pub fn parse_dimensions(input: &str) -> IResult<&str, (u32, u32)> {
    all_consuming(delimited(
        multispace0,
        separated_pair(parse_positive_u32, multispace1, parse_positive_u32),
        multispace0,
    ))(input)
}
