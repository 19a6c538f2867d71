#![no_main]

use libfuzzer_sys::fuzz_target;
use packignore::infrastructure::repositories::{parse_lines, render};
use packignore::{ExclusionSet, PathSyntax};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let syntax = PathSyntax::default();
        let set = ExclusionSet::from_paths(syntax, parse_lines(content));

        // Every listed path is covered, and saving then loading is lossless.
        for line in parse_lines(content) {
            assert!(syntax.is_malformed(line) || set.covers(line));
        }
        let reloaded = ExclusionSet::from_paths(syntax, parse_lines(&render(&set)));
        assert_eq!(reloaded, set);
    }
});
