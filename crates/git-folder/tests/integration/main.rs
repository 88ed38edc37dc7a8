// Copyright 2026 Oxide Computer Company

//! Integration tests for git-folder, run against a real git.
