//! Scenario: Archiving a source tree without build output
//!
//! Journey: A developer excludes `build` and `src/tmp` and checks the
//! manifest, then edits the exclusion file by hand on another platform.

use crate::common::*;
use crate::assert_success;

#[test]
fn scenario_prune_build_output() {
    let env = TestEnv::with_files(PROJECT_FILES);

    assert_success!(env.run(&["exclude", "build", "src/tmp"]));
    let list = assert_success!(env.run(&["list"]));

    assert_eq!(list.lines(), vec![".packignore", "README", "src/main.c"]);
}

/// SCENARIO: exclusion file saved with Windows line endings
#[test]
fn scenario_hand_edited_exclusion_file() {
    let env = TestEnv::with_files(PROJECT_FILES);
    env.write_ignore_file("build\r\nsrc/tmp\r\n");

    let show = assert_success!(env.run(&["show"]));
    assert_eq!(show.lines(), vec!["build", "src/tmp"]);

    // The next save rewrites the file with plain newlines.
    assert_success!(env.run(&["exclude", "README"]));
    assert_eq!(env.read_ignore_file(), "README\nbuild\nsrc/tmp\n");
}
