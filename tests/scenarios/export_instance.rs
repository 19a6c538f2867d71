//! Scenario: Exporting a game instance
//!
//! Journey: A player shares their instance without logs, screenshots or one
//! world's region data.
//!
//! Steps:
//! 1. Looks at the tree: nothing is excluded
//! 2. Excludes logs, screenshots and a region directory
//! 3. Checks the tree: saves and world1 show as mixed
//! 4. Lists the archive manifest
//! 5. Changes their mind about world1 and includes the whole save
//!
//! Success Criteria:
//! - Exclusions survive between runs in `.packignore`
//! - Manifest never contains excluded files
//! - Including a directory clears everything recorded below it

use crate::common::*;
use crate::{assert_output_contains, assert_success};

#[test]
fn scenario_export_instance_journey() {
    let env = TestEnv::with_files(INSTANCE_FILES);

    // Step 1: fresh tree, every row checked
    let status = assert_success!(env.run(&["status"]));
    assert!(status.lines().iter().all(|line| line.contains("[x]")));

    // Step 2: exclude user data
    assert_success!(env.run(&["exclude", "logs", "screenshots", "saves/world1/region"]));
    assert_eq!(
        env.read_ignore_file(),
        "logs\nsaves/world1/region\nscreenshots\n"
    );

    // Step 3: tri-state tree
    let status = assert_success!(env.run(&["status"]));
    assert!(status.stdout.contains("[-] saves/"));
    assert!(status.stdout.contains("    [-] world1/"));
    assert!(status.stdout.contains("  [ ] screenshots/"));

    // Step 4: manifest
    let list = assert_success!(env.run(&["list"]));
    assert_eq!(
        list.lines(),
        vec![
            ".packignore",
            "mods/jei.jar",
            "mods/optifine.jar",
            "options.txt",
            "saves/world1/level.dat",
            "saves/world2/level.dat",
        ]
    );

    // Step 5: include the save again
    let include = assert_success!(env.run(&["include", "saves"]));
    assert_eq!(include.lines(), vec!["included saves"]);
    let list = assert_success!(env.run(&["list"]));
    assert!(list.lines().contains(&"saves/world1/region/r.0.0.mca"));
    assert_eq!(env.read_ignore_file(), "logs\nscreenshots\n");
}

/// SCENARIO: un-excluding inside an excluded directory has no effect
#[test]
fn scenario_include_inside_excluded_directory() {
    let env = TestEnv::with_files(INSTANCE_FILES);
    assert_success!(env.run(&["exclude", "saves"]));

    let result = assert_success!(env.run(&["include", "saves/world2"]));
    assert_output_contains!(result, "still excluded by 'saves'");

    let list = assert_success!(env.run(&["list"]));
    assert!(!list.stdout.contains("saves/"));
}
