//! Property tests for the rsync and ssh invocations.

use proptest::prelude::*;

use robodeploy::domain::ports::ToolStatus;
use robodeploy::infrastructure::{RsyncSync, SshBuild};
use robodeploy::RemoteTarget;

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 ._'-]{1,12}").unwrap()
}

fn local_dir() -> impl Strategy<Value = String> {
    proptest::collection::vec(segment(), 1..=5).prop_map(|s| format!("/{}", s.join("/")))
}

fn name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_.-]{0,15}").unwrap()
}

fn remote_path() -> impl Strategy<Value = String> {
    prop_oneof![
        local_dir(),
        proptest::collection::vec(segment(), 1..=3).prop_map(|s| format!("~/{}", s.join("/"))),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the sync always carries exactly the five standard excludes,
    /// whatever the local and remote paths look like.
    #[test]
    fn property_rsync_has_five_fixed_excludes(
        source in local_dir(),
        user in name(),
        host in name(),
        path in remote_path(),
        dry_run in any::<bool>(),
    ) {
        let target = RemoteTarget::new(user.clone(), host.clone(), path.clone()).unwrap();
        let inv = RsyncSync::new(&source, target).with_dry_run(dry_run).invocation();

        prop_assert_eq!(inv.program.as_str(), "rsync");

        let excluded: Vec<&str> = inv
            .args
            .windows(2)
            .filter(|w| w[0] == "--exclude")
            .map(|w| w[1].as_str())
            .collect();
        prop_assert_eq!(
            excluded,
            vec![".git", "*.pyc", "CMakeCache.txt", "CMakeFiles", "build"]
        );

        prop_assert_eq!(inv.args.iter().any(|a| a == "--dry-run"), dry_run);

        let n = inv.args.len();
        prop_assert!(inv.args[n - 2].ends_with('/'));
        prop_assert!(inv.args[n - 2].starts_with(source.trim_end_matches('/')));
        prop_assert_eq!(&inv.args[n - 1], &format!("{}@{}:{}", user, host, path));
    }

    /// PROPERTY: the build always runs on `user@host` and ends with the build script.
    #[test]
    fn property_ssh_targets_host_and_runs_build_script(
        user in name(),
        host in name(),
        path in remote_path(),
    ) {
        let target = RemoteTarget::new(user.clone(), host.clone(), path.clone()).unwrap();
        let inv = SshBuild::new(target).invocation();

        prop_assert_eq!(inv.program.as_str(), "ssh");
        prop_assert_eq!(inv.args.len(), 2);
        prop_assert_eq!(&inv.args[0], &format!("{}@{}", user, host));
        prop_assert!(inv.args[1].starts_with("cd "));
        prop_assert!(inv.args[1].ends_with(" && ./scripts/build.sh"));
        if path.starts_with("~/") {
            prop_assert!(inv.args[1].starts_with("cd ~/"));
        }
    }

    /// PROPERTY: a tool's exit code survives unchanged.
    #[test]
    fn property_tool_status_keeps_exit_code(code in 0i32..=255) {
        let status = ToolStatus::from_code(code);
        prop_assert_eq!(status.code(), code);
        prop_assert_eq!(status.success(), code == 0);
    }
}
