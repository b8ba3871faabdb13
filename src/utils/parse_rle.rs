use super::LifeError;
use crate::{Coord, State};

/// Parses an RLE pattern into a state.
///
/// The first pattern row ends up at `y = 0` and following rows go downwards
/// (`y = -1, -2, ...`), so the pattern renders the way it is written.
pub fn parse_rle(data: &[u8]) -> Result<State, LifeError> {
    let err = |msg: &str| LifeError::Rle(msg.to_string());

    let mut i = 0;
    // skipping comment and blank lines
    while i < data.len() && (data[i] == b'#' || data[i].is_ascii_whitespace()) {
        if data[i] == b'#' {
            while i < data.len() && data[i] != b'\n' {
                i += 1;
            }
        }
        i += 1;
    }
    // header line: x = <width>, y = <height>[, rule = ...]
    if data.get(i) != Some(&b'x') {
        return Err(err("missing header line"));
    }
    let header_end = data[i..]
        .iter()
        .position(|&c| c == b'\n')
        .map_or(data.len(), |p| i + p);
    let (width, height) = {
        let mut j = i;
        let width =
            parse_next_number(data, &mut j, header_end).ok_or_else(|| err("missing width"))?;
        let height =
            parse_next_number(data, &mut j, header_end).ok_or_else(|| err("missing height"))?;
        (width, height)
    };
    i = header_end;

    // run-length encoded pattern data
    let mut state = State::new();
    let (mut x, mut y, mut cnt) = (0u64, 0u64, 1u64);
    while i < data.len() {
        match data[i] {
            c if c.is_ascii_whitespace() => i += 1,
            b'0'..=b'9' => {
                cnt = parse_next_number(data, &mut i, data.len())
                    .ok_or_else(|| err("bad run count"))?;
            }
            b'o' => {
                if x.saturating_add(cnt) > width || y >= height {
                    return Err(err("cells outside of declared size"));
                }
                for _ in 0..cnt {
                    state.insert(Coord::new(x as i64, -(y as i64)));
                    x += 1;
                }
                (i, cnt) = (i + 1, 1);
            }
            b'b' => {
                (x, i, cnt) = (x.saturating_add(cnt), i + 1, 1);
                if x > width {
                    return Err(err("row is longer than declared width"));
                }
            }
            b'$' => {
                (x, y, i, cnt) = (0, y.saturating_add(cnt), i + 1, 1);
                if y > height {
                    return Err(err("more rows than declared height"));
                }
            }
            b'!' => return Ok(state),
            _ => return Err(err("unexpected symbol")),
        }
    }
    Err(err("missing terminating '!'"))
}

/// Reads the next decimal number in `data[*i..end]`, skipping anything before it.
fn parse_next_number(data: &[u8], i: &mut usize, end: usize) -> Option<u64> {
    while *i < end && !data[*i].is_ascii_digit() {
        *i += 1;
    }
    let start = *i;
    while *i < end && data[*i].is_ascii_digit() {
        *i += 1;
    }
    std::str::from_utf8(&data[start..*i]).ok()?.parse().ok()
}
