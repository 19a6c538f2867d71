//! Test fixtures - reusable trees for tests.

/// A small game instance: user data, logs and mods.
pub const INSTANCE_FILES: &[&str] = &[
    "options.txt",
    "mods/jei.jar",
    "mods/optifine.jar",
    "saves/world1/level.dat",
    "saves/world1/region/r.0.0.mca",
    "saves/world2/level.dat",
    "logs/latest.log",
    "screenshots/2024-01-01.png",
];

/// The tree used to illustrate pruning: build output and scratch files.
pub const PROJECT_FILES: &[&str] = &["build/out.o", "src/tmp/x.log", "src/main.c", "README"];
