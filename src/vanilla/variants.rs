//! Blockstate rule tables of the vanilla block archetypes.

use serde_json::{json, Map, Value};

const HORIZONTAL: [&str; 4] = ["east", "west", "south", "north"];
const ALPHABETICAL: [&str; 4] = ["east", "north", "south", "west"];

/// Rotation of stairs and doors facing a direction, east being unrotated.
fn rotation_from_east(facing: &str) -> u32 {
    match facing {
        "south" => 90,
        "west" => 180,
        "north" => 270,
        _ => 0,
    }
}

/// Rotation of trapdoors, buttons and wall sides facing a direction, north being unrotated.
fn rotation_from_north(facing: &str) -> u32 {
    match facing {
        "east" => 90,
        "south" => 180,
        "west" => 270,
        _ => 0,
    }
}

/// A single model variant. Zero rotations and a disabled uvlock are left out.
pub fn variant(model: &str, x: u32, y: u32, uvlock: bool) -> Value {
    let mut map = Map::new();
    map.insert("model".to_string(), Value::from(model));
    if x != 0 {
        map.insert("x".to_string(), Value::from(x));
    }
    if y != 0 {
        map.insert("y".to_string(), Value::from(y));
    }
    if uvlock {
        map.insert("uvlock".to_string(), Value::from(true));
    }
    Value::Object(map)
}

/// Variants of a slab. A double slab shows the full block.
pub fn slab(block: &str, slab: &str, slab_top: &str) -> Map<String, Value> {
    let mut variants = Map::new();
    variants.insert("type=bottom".to_string(), variant(slab, 0, 0, false));
    variants.insert("type=top".to_string(), variant(slab_top, 0, 0, false));
    variants.insert("type=double".to_string(), variant(block, 0, 0, false));
    variants
}

/// Variants of stairs.
pub fn stairs(stairs: &str, inner: &str, outer: &str) -> Map<String, Value> {
    // (shape, model, turn when on the floor, turn when upside down)
    let shapes = [
        ("straight", stairs, 0, 0),
        ("outer_right", outer, 0, 90),
        ("outer_left", outer, 270, 0),
        ("inner_right", inner, 0, 90),
        ("inner_left", inner, 270, 0),
    ];

    let mut variants = Map::new();
    for half in ["bottom", "top"] {
        for (shape, model, bottom_turn, top_turn) in shapes {
            for facing in HORIZONTAL {
                let base = rotation_from_east(facing);
                let key = format!("facing={facing},half={half},shape={shape}");
                let value = if half == "bottom" {
                    let y = (base + bottom_turn) % 360;
                    variant(model, 0, y, y != 0)
                } else {
                    variant(model, 180, (base + top_turn) % 360, true)
                };
                variants.insert(key, value);
            }
        }
    }
    variants
}

/// Multipart parts of a fence.
pub fn fence(post: &str, side: &str) -> Vec<Value> {
    let mut parts = vec![json!({ "model": post })];
    parts.extend(sides(side));
    parts
}

/// Variants of a fence gate.
pub fn fence_gate(gate: &str, open: &str, wall: &str, wall_open: &str) -> Map<String, Value> {
    let states = [
        ("false", "false", gate),
        ("false", "true", open),
        ("true", "false", wall),
        ("true", "true", wall_open),
    ];

    let mut variants = Map::new();
    for (in_wall, is_open, model) in states {
        for facing in ["south", "west", "north", "east"] {
            let key = format!("facing={facing},in_wall={in_wall},open={is_open}");
            let y = match facing {
                "west" => 90,
                "north" => 180,
                "east" => 270,
                _ => 0,
            };
            variants.insert(key, variant(model, 0, y, true));
        }
    }
    variants
}

/// Multipart parts of a wall.
pub fn wall(post: &str, side: &str) -> Vec<Value> {
    let mut parts = vec![json!([{ "up": "true" }, { "model": post }])];
    parts.extend(sides(side));
    parts
}

fn sides(side: &str) -> Vec<Value> {
    ["north", "east", "south", "west"]
        .into_iter()
        .map(|direction| {
            json!([
                { direction: "true" },
                variant(side, 0, rotation_from_north(direction), true)
            ])
        })
        .collect()
}

/// Variants of a door.
pub fn door(bottom: &str, bottom_hinge: &str, top: &str, top_hinge: &str) -> Map<String, Value> {
    let mut variants = Map::new();
    for facing in ALPHABETICAL {
        let base = rotation_from_east(facing);
        for (half, plain, hinge) in [("lower", bottom, bottom_hinge), ("upper", top, top_hinge)] {
            let states = [
                ("left", "false", plain, 0),
                ("left", "true", hinge, 90),
                ("right", "false", hinge, 0),
                ("right", "true", plain, 270),
            ];
            for (side, open, model, turn) in states {
                let key = format!("facing={facing},half={half},hinge={side},open={open}");
                variants.insert(key, variant(model, 0, (base + turn) % 360, false));
            }
        }
    }
    variants
}

/// Variants of a trapdoor.
pub fn trapdoor(bottom: &str, top: &str, open: &str) -> Map<String, Value> {
    let mut variants = Map::new();
    for facing in ALPHABETICAL {
        let y = rotation_from_north(facing);
        variants.insert(
            format!("facing={facing},half=bottom,open=false"),
            variant(bottom, 0, y, false),
        );
        variants.insert(
            format!("facing={facing},half=bottom,open=true"),
            variant(open, 0, y, false),
        );
        variants.insert(
            format!("facing={facing},half=top,open=false"),
            variant(top, 0, y, false),
        );
        variants.insert(
            format!("facing={facing},half=top,open=true"),
            variant(open, 180, (y + 180) % 360, false),
        );
    }
    variants
}

/// Variants of a button.
pub fn button(button: &str, pressed: &str) -> Map<String, Value> {
    let mut variants = Map::new();
    for face in ["ceiling", "floor", "wall"] {
        for facing in ALPHABETICAL {
            let y = rotation_from_north(facing);
            for (powered, model) in [("false", button), ("true", pressed)] {
                let key = format!("face={face},facing={facing},powered={powered}");
                let value = match face {
                    "ceiling" => variant(model, 180, (y + 180) % 360, false),
                    "wall" => variant(model, 90, y, true),
                    _ => variant(model, 0, y, false),
                };
                variants.insert(key, value);
            }
        }
    }
    variants
}

/// Variants of a pressure plate.
pub fn pressure_plate(up: &str, down: &str) -> Map<String, Value> {
    let mut variants = Map::new();
    variants.insert("powered=false".to_string(), variant(up, 0, 0, false));
    variants.insert("powered=true".to_string(), variant(down, 0, 0, false));
    variants
}
