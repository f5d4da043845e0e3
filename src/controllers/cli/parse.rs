use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::presenters::file::output_format::OutputFormat;
use std::path::PathBuf;
use std::str::FromStr;

fn parse_pair<T: FromStr>(input: &str) -> Result<(T, T), String> {
    let lower = input.to_ascii_lowercase();
    let mut parts = lower.split('x');

    match (parts.next(), parts.next(), parts.next()) {
        (Some(a), Some(b), None) => {
            let a = a.trim().parse().map_err(|_| format!("invalid value '{}' in '{}'", a, input))?;
            let b = b.trim().parse().map_err(|_| format!("invalid value '{}' in '{}'", b, input))?;
            Ok((a, b))
        }
        _ => Err(format!("expected a pair like AxB, got '{}'", input)),
    }
}

/// `WIDTHxHEIGHT`, e.g. `500x300`.
pub fn parse_size(input: &str) -> Result<CanvasSize, String> {
    let (width, height) = parse_pair::<u32>(input)?;
    Ok(CanvasSize::new(width, height))
}

/// `XxY`, e.g. `-0.75x0`.
pub fn parse_center(input: &str) -> Result<Point, String> {
    let (x, y) = parse_pair::<f64>(input)?;
    Ok(Point { x, y })
}

/// An output path whose extension names a format the presenter can write.
pub fn parse_output(input: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(input);
    OutputFormat::from_path(&path).map_err(|err| err.to_string())?;
    Ok(path)
}

fn parse_part(part: &str, input: &str) -> Result<f64, String> {
    part.parse()
        .map_err(|_| format!("invalid complex number '{}'", input))
}

/// Parses `a`, `bj`, `a+bj`, `a-bj`, `j`, `-j` and the same forms with `i`
/// for `j`, optionally in parentheses. Whitespace is ignored, so split
/// command line tokens such as `-0.7 +0.27015 j` can be joined first.
pub fn parse_complex(input: &str) -> Result<Complex, String> {
    let compact: String = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c.to_ascii_lowercase() {
            'i' => 'j',
            other => other,
        })
        .collect();

    let body = compact
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or(&compact);

    if body.is_empty() {
        return Err("empty complex number".to_string());
    }

    let Some(body) = body.strip_suffix('j') else {
        return Ok(Complex::new(parse_part(body, input)?, 0.0));
    };

    // the imaginary part starts at the last sign that is not an exponent sign
    let split = body
        .char_indices()
        .rev()
        .find(|&(index, c)| (c == '+' || c == '-') && index > 0 && !body[..index].ends_with('e'))
        .map(|(index, _)| index);

    let (real, imag) = match split {
        Some(index) => (&body[..index], &body[index..]),
        None => ("", body),
    };

    let real = if real.is_empty() {
        0.0
    } else {
        parse_part(real, input)?
    };

    let imag = match imag {
        "" | "+" => 1.0,
        "-" => -1.0,
        digits => parse_part(digits, input)?,
    };

    Ok(Complex::new(real, imag))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("500x300"), Ok(CanvasSize::new(500, 300)));
        assert_eq!(parse_size("64X48"), Ok(CanvasSize::new(64, 48)));
    }

    #[test]
    fn test_parse_size_rejects_malformed() {
        assert!(parse_size("500").is_err());
        assert!(parse_size("500x300x2").is_err());
        assert!(parse_size("-5x3").is_err());
        assert!(parse_size("axb").is_err());
    }

    #[test]
    fn test_parse_center() {
        assert_eq!(parse_center("-0.75x0"), Ok(Point { x: -0.75, y: 0.0 }));
        assert_eq!(parse_center("0x0"), Ok(Point::default()));
    }

    #[test]
    fn test_parse_complex_split_tokens() {
        let joined = ["-0.7", "+0.27015", "j"].concat();

        assert_eq!(parse_complex(&joined), Ok(Complex::new(-0.7, 0.27015)));
    }

    #[test]
    fn test_parse_complex_forms() {
        assert_eq!(parse_complex("2"), Ok(Complex::new(2.0, 0.0)));
        assert_eq!(parse_complex("2+0j"), Ok(Complex::new(2.0, 0.0)));
        assert_eq!(parse_complex("0.5j"), Ok(Complex::new(0.0, 0.5)));
        assert_eq!(parse_complex("j"), Ok(Complex::new(0.0, 1.0)));
        assert_eq!(parse_complex("-j"), Ok(Complex::new(0.0, -1.0)));
        assert_eq!(parse_complex("1-j"), Ok(Complex::new(1.0, -1.0)));
        assert_eq!(parse_complex("(0.285+0.01i)"), Ok(Complex::new(0.285, 0.01)));
        assert_eq!(parse_complex(" -0.8 + 0.156 I "), Ok(Complex::new(-0.8, 0.156)));
    }

    #[test]
    fn test_parse_complex_exponents() {
        assert_eq!(parse_complex("1e-3+2j"), Ok(Complex::new(0.001, 2.0)));
        assert_eq!(parse_complex("1e-3j"), Ok(Complex::new(0.0, 0.001)));
        assert_eq!(parse_complex("-2E+1-1e-1j"), Ok(Complex::new(-20.0, -0.1)));
    }

    #[test]
    fn test_parse_complex_rejects_garbage() {
        assert!(parse_complex("").is_err());
        assert!(parse_complex("abc").is_err());
        assert!(parse_complex("1+2jj").is_err());
        assert!(parse_complex("1++2j").is_err());
    }
}
