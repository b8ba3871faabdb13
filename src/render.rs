use crate::{Config, Coord, State};

/// Draws the bounding box of `state` with the highest row first.
pub fn render(state: &State, config: &Config) -> String {
    let bbox = state.bounding_box();
    let mut output = String::new();
    for y in (bbox.bottom_left.y..=bbox.top_right.y).rev() {
        for x in bbox.bottom_left.x..=bbox.top_right.x {
            if x != bbox.bottom_left.x {
                output.push_str(config.separator);
            }
            output.push(if state.contains(Coord::new(x, y)) {
                config.alive_glyph
            } else {
                config.dead_glyph
            });
        }
        output.push('\n');
    }
    output
}

/// Renders every state followed by an empty line.
pub fn render_generations<'a>(
    states: impl IntoIterator<Item = &'a State>,
    config: &Config,
) -> String {
    let mut output = String::new();
    for state in states {
        output.push_str(&render(state, config));
        output.push('\n');
    }
    output
}
