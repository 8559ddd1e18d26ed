use geojson::Value;

use crate::geometry::for_each_position_mut;

/// Copy of `value` with x and y of every position swapped, for clients that
/// expect lat/lon order.
pub fn flip_axes(value: &Value) -> Value {
    let mut flipped = value.clone();
    for_each_position_mut(&mut flipped, |position| {
        if position.len() >= 2 {
            position.swap(0, 1);
        }
    });
    flipped
}
