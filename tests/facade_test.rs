//! Tests for the subcommand façades: the argument vector each operation produces

use std::path::{Path, PathBuf};
use std::sync::Arc;

use rstest::{fixture, rstest};

use duinocli::application::commands::{
    BurnBootloaderOptions, CompileOptions, CoreInstallOptions, DebugOptions, LibInstallOptions,
    MonitorOptions, UploadOptions,
};
use duinocli::application::ArduinoCli;
use duinocli::config::Settings;
use duinocli::util::testing::RecordingRunner;

struct Harness {
    runner: Arc<RecordingRunner>,
    cli: ArduinoCli,
}

impl Harness {
    /// Arguments after `tool --format json` of the last call.
    fn tail(&self) -> Vec<String> {
        let call = self.runner.last_call().expect("a call was made");
        assert_eq!(&call[..3], &["tool", "--format", "json"]);
        call[3..].to_vec()
    }
}

#[fixture]
fn h() -> Harness {
    let runner = Arc::new(RecordingRunner::new());
    let cli = ArduinoCli::with_executable("tool", &Settings::default(), runner.clone());
    Harness { runner, cli }
}

// ============================================================
// version / outdated / update / upgrade / cache / completion
// ============================================================

#[rstest]
fn given_registry_when_version_then_exact_vector(h: Harness) {
    // Act
    h.cli.version().run().unwrap();

    // Assert
    assert_eq!(
        h.runner.last_call().unwrap(),
        vec!["tool", "--format", "json", "version"]
    );
}

#[rstest]
fn given_simple_commands_when_run_then_subcommand_and_flags(h: Harness) {
    h.cli.outdated().run().unwrap();
    assert_eq!(h.tail(), vec!["outdated"]);

    h.cli.update().run(true).unwrap();
    assert_eq!(h.tail(), vec!["update", "--show-outdated"]);

    h.cli.upgrade().run(false, true).unwrap();
    assert_eq!(h.tail(), vec!["upgrade", "--skip-post-install"]);

    h.cli.cache().clean().unwrap();
    assert_eq!(h.tail(), vec!["cache", "clean"]);

    h.cli.completion().run("zsh", true).unwrap();
    assert_eq!(h.tail(), vec!["completion", "zsh", "--no-descriptions"]);
}

// ============================================================
// board
// ============================================================

#[rstest]
fn given_board_details_when_called_then_fqbn_and_repeated_options(h: Harness) {
    // Act
    h.cli
        .board()
        .details("arduino:avr:nano", true, false, &["cpu=atmega328old", "x=y"])
        .unwrap();

    // Assert
    assert_eq!(
        h.tail(),
        vec![
            "board",
            "details",
            "--fqbn",
            "arduino:avr:nano",
            "--full",
            "--board-options",
            "cpu=atmega328old",
            "--board-options",
            "x=y",
        ]
    );
}

#[rstest]
fn given_board_list_without_options_when_called_then_bare_operation(h: Harness) {
    h.cli.board().list(None, None, false).unwrap();
    assert_eq!(h.tail(), vec!["board", "list"]);
}

#[rstest]
fn given_board_attach_when_called_then_sketch_path_last(h: Harness) {
    h.cli
        .board()
        .attach(Some("/dev/ttyACM0"), None, Some(Path::new("/sketches/blink")), None)
        .unwrap();
    assert_eq!(
        h.tail(),
        vec!["board", "attach", "--port", "/dev/ttyACM0", "/sketches/blink"]
    );
}

#[rstest]
fn given_board_listall_when_called_then_filters_positional(h: Harness) {
    h.cli.board().listall(&["uno", "nano"], true).unwrap();
    assert_eq!(
        h.tail(),
        vec!["board", "listall", "uno", "nano", "--show-hidden"]
    );
}

// ============================================================
// core
// ============================================================

#[rstest]
fn given_core_install_when_called_then_cores_and_flags(h: Harness) {
    // Act
    h.cli
        .core()
        .install(
            &["arduino:avr@1.8.6"],
            &CoreInstallOptions {
                run_post_install: true,
                ..CoreInstallOptions::default()
            },
        )
        .unwrap();

    // Assert
    assert_eq!(
        h.tail(),
        vec!["core", "install", "arduino:avr@1.8.6", "--run-post-install"]
    );
}

#[rstest]
fn given_core_operations_when_called_then_operation_names_match_cli(h: Harness) {
    h.cli.core().update_index().unwrap();
    assert_eq!(h.tail(), vec!["core", "update-index"]);

    h.cli.core().list(true, true).unwrap();
    assert_eq!(h.tail(), vec!["core", "list", "--all", "--updatable"]);

    h.cli.core().search(&["esp32"], false).unwrap();
    assert_eq!(h.tail(), vec!["core", "search", "esp32"]);

    h.cli.core().upgrade(&[], false, false).unwrap();
    assert_eq!(h.tail(), vec!["core", "upgrade"]);
}

// ============================================================
// lib
// ============================================================

#[rstest]
fn given_lib_install_from_git_when_called_then_git_url_flag(h: Harness) {
    // Act
    h.cli
        .lib()
        .install(
            &["https://github.com/arduino-libraries/Servo.git"],
            &LibInstallOptions {
                git_url: true,
                no_deps: true,
                ..LibInstallOptions::default()
            },
        )
        .unwrap();

    // Assert
    assert_eq!(
        h.tail(),
        vec![
            "lib",
            "install",
            "https://github.com/arduino-libraries/Servo.git",
            "--git-url",
            "--no-deps",
        ]
    );
}

#[rstest]
fn given_lib_queries_when_called_then_expected_vectors(h: Harness) {
    h.cli.lib().search(&["servo"], true, true).unwrap();
    assert_eq!(
        h.tail(),
        vec!["lib", "search", "servo", "--names", "--omit-releases-details"]
    );

    h.cli
        .lib()
        .list(Some("Servo"), false, true, Some("arduino:avr:uno"))
        .unwrap();
    assert_eq!(
        h.tail(),
        vec!["lib", "list", "Servo", "--updatable", "--fqbn", "arduino:avr:uno"]
    );

    h.cli.lib().deps("Arduino_ConnectionHandler", false).unwrap();
    assert_eq!(h.tail(), vec!["lib", "deps", "Arduino_ConnectionHandler"]);

    h.cli.lib().examples(None, Some("arduino:avr:uno")).unwrap();
    assert_eq!(h.tail(), vec!["lib", "examples", "--fqbn", "arduino:avr:uno"]);
}

// ============================================================
// compile / upload
// ============================================================

#[rstest]
fn given_compile_options_when_run_then_lists_joined_and_sketch_last(h: Harness) {
    // Arrange
    let options = CompileOptions {
        fqbn: Some("arduino:avr:uno".into()),
        build_properties: vec!["build.extra_flags=-DDEBUG".into(), "a=b".into()],
        libraries: vec!["/libs/one".into(), "/libs/two".into()],
        export_binaries: true,
        jobs: Some(4),
        ..CompileOptions::default()
    };

    // Act
    h.cli
        .compile()
        .run(Some(Path::new("/sketches/blink")), &options)
        .unwrap();

    // Assert
    let tail = h.tail();
    assert_eq!(tail[0], "compile");
    assert!(tail.windows(2).any(|w| w == ["--fqbn", "arduino:avr:uno"]));
    assert_eq!(tail.last().unwrap(), "/sketches/blink");
    assert_eq!(tail.iter().filter(|a| *a == "--build-property").count(), 2);
    let libraries = tail.iter().position(|a| a == "--libraries").unwrap();
    assert_eq!(tail[libraries + 1], "/libs/one,/libs/two");
    assert!(tail.contains(&"--export-binaries".to_string()));
    let jobs = tail.iter().position(|a| a == "--jobs").unwrap();
    assert_eq!(tail[jobs + 1], "4");
}

#[rstest]
fn given_default_compile_options_when_run_then_only_subcommand(h: Harness) {
    h.cli.compile().run(None, &CompileOptions::default()).unwrap();
    assert_eq!(h.tail(), vec!["compile"]);
}

#[rstest]
fn given_upload_options_when_run_then_port_stripped_and_verify_set(h: Harness) {
    // Arrange
    let options = UploadOptions {
        fqbn: Some("arduino:avr:uno".into()),
        port: Some("--dev/ttyACM0".into()),
        verify: true,
        input_dir: Some(PathBuf::from("/build")),
        ..UploadOptions::default()
    };

    // Act
    h.cli
        .upload()
        .run(Some(Path::new("/sketches/blink")), &options)
        .unwrap();

    // Assert
    assert_eq!(
        h.tail(),
        vec![
            "upload",
            "--fqbn",
            "arduino:avr:uno",
            "--input-dir",
            "/build",
            "--port",
            "dev/ttyACM0",
            "--verify",
            "/sketches/blink",
        ]
    );
}

// ============================================================
// config / sketch
// ============================================================

#[rstest]
fn given_config_operations_when_called_then_expected_vectors(h: Harness) {
    h.cli
        .config()
        .set("directories.data", &["/opt/duino/data"])
        .unwrap();
    assert_eq!(
        h.tail(),
        vec!["config", "set", "directories.data", "/opt/duino/data"]
    );

    h.cli
        .config()
        .init(None, Some(Path::new("/opt/duino/arduino-cli.yaml")), true)
        .unwrap();
    assert_eq!(
        h.tail(),
        vec![
            "config",
            "init",
            "--dest-file",
            "/opt/duino/arduino-cli.yaml",
            "--overwrite",
        ]
    );

    h.cli
        .config()
        .add("board_manager.additional_urls", &["https://x/index.json"])
        .unwrap();
    assert_eq!(
        h.tail(),
        vec!["config", "add", "board_manager.additional_urls", "https://x/index.json"]
    );

    h.cli.config().dump().unwrap();
    assert_eq!(h.tail(), vec!["config", "dump"]);
}

#[rstest]
fn given_sketch_operations_when_called_then_expected_vectors(h: Harness) {
    h.cli.sketch().new_sketch("Blink", false).unwrap();
    assert_eq!(h.tail(), vec!["sketch", "new", "Blink"]);

    h.cli
        .sketch()
        .archive(Path::new("/sketches/blink"), Some(Path::new("/tmp/blink.zip")), true, true)
        .unwrap();
    assert_eq!(
        h.tail(),
        vec![
            "sketch",
            "archive",
            "/sketches/blink",
            "/tmp/blink.zip",
            "--include-build-dir",
            "--overwrite",
        ]
    );
}

// ============================================================
// monitor / debug / burn-bootloader / daemon
// ============================================================

#[rstest]
fn given_monitor_config_when_run_then_config_repeated(h: Harness) {
    // Arrange
    let options = MonitorOptions {
        port: Some("/dev/ttyUSB0".into()),
        config: vec!["baudrate=115200".into(), "parity=none".into()],
        describe: true,
        ..MonitorOptions::default()
    };

    // Act
    h.cli.monitor().run(&options).unwrap();

    // Assert
    assert_eq!(
        h.tail(),
        vec![
            "monitor",
            "--port",
            "/dev/ttyUSB0",
            "--config",
            "baudrate=115200",
            "--config",
            "parity=none",
            "--describe",
        ]
    );
}

#[rstest]
fn given_debug_check_when_called_then_check_operation(h: Harness) {
    let options = DebugOptions {
        fqbn: Some("arduino:samd:mkr1000".into()),
        ..DebugOptions::default()
    };

    h.cli.debug().check(&options).unwrap();

    let tail = h.tail();
    assert_eq!(&tail[..2], &["debug", "check"]);
    assert!(tail.contains(&"arduino:samd:mkr1000".to_string()));
}

#[rstest]
fn given_burn_bootloader_when_run_then_programmer_and_verify(h: Harness) {
    let options = BurnBootloaderOptions {
        fqbn: Some("arduino:avr:uno".into()),
        programmer: Some("usbasp".into()),
        verify: true,
        ..BurnBootloaderOptions::default()
    };

    h.cli.burn_bootloader().run(&options).unwrap();

    let tail = h.tail();
    assert_eq!(tail[0], "burn-bootloader");
    assert!(tail.windows(2).any(|w| w == ["--programmer", "usbasp"]));
    assert!(tail.contains(&"--verify".to_string()));
}

#[rstest]
fn given_daemon_port_when_run_then_port_rendered(h: Harness) {
    h.cli.daemon().run(Some(50051), false, false, &[]).unwrap();
    assert_eq!(h.tail(), vec!["daemon", "--port", "50051"]);
}
