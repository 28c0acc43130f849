use std::collections::HashMap;

/// Built-in armories as (text, is_yaml).
pub fn builtin_weapons() -> HashMap<&'static str, (&'static str, bool)> {
    HashMap::from([
        ("basic", (include_str!("../content/weapons/basic.json"), false)),
        ("heavy", (include_str!("../content/weapons/heavy.yaml"), true)),
    ])
}

pub fn builtin_battles() -> HashMap<&'static str, &'static str> {
    HashMap::from([(
        "hero_vs_goblin",
        include_str!("../content/battles/hero_vs_goblin.json"),
    )])
}
