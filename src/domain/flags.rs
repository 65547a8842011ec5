//! arduino-cli subcommand names and flag spellings

// Global flags
pub const FORMAT: &str = "--format";
pub const FORMAT_JSON: &str = "json";
pub const CONFIG_FILE: &str = "--config-file";
pub const ADDITIONAL_URLS: &str = "--additional-urls";
pub const LOG_FILE: &str = "--log-file";
pub const LOG_FORMAT: &str = "--log-format";
pub const LOG_LEVEL: &str = "--log-level";
pub const NO_COLOR: &str = "--no-color";

// Subcommands
pub const BOARD: &str = "board";
pub const BURN_BOOTLOADER: &str = "burn-bootloader";
pub const CACHE: &str = "cache";
pub const COMPILE: &str = "compile";
pub const COMPLETION: &str = "completion";
pub const CONFIG: &str = "config";
pub const CORE: &str = "core";
pub const DAEMON: &str = "daemon";
pub const DEBUG: &str = "debug";
pub const LIB: &str = "lib";
pub const MONITOR: &str = "monitor";
pub const OUTDATED: &str = "outdated";
pub const SKETCH: &str = "sketch";
pub const UPDATE: &str = "update";
pub const UPGRADE: &str = "upgrade";
pub const UPLOAD: &str = "upload";
pub const VERSION: &str = "version";

// Operations
pub const ADD: &str = "add";
pub const ARCHIVE: &str = "archive";
pub const ATTACH: &str = "attach";
pub const CHECK: &str = "check";
pub const CLEAN: &str = "clean";
pub const DELETE: &str = "delete";
pub const DEPS: &str = "deps";
pub const DETAILS: &str = "details";
pub const DOWNLOAD: &str = "download";
pub const DUMP: &str = "dump";
pub const EXAMPLES: &str = "examples";
pub const GET: &str = "get";
pub const INIT: &str = "init";
pub const INSTALL: &str = "install";
pub const LIST: &str = "list";
pub const LISTALL: &str = "listall";
pub const NEW: &str = "new";
pub const REMOVE: &str = "remove";
pub const SEARCH: &str = "search";
pub const SET: &str = "set";
pub const UNINSTALL: &str = "uninstall";
pub const UPDATE_INDEX: &str = "update-index";

// Operation flags
pub const ALL: &str = "--all";
pub const BOARD_OPTIONS: &str = "--board-options";
pub const BUILD_CACHE_PATH: &str = "--build-cache-path";
pub const BUILD_PATH: &str = "--build-path";
pub const BUILD_PROPERTY: &str = "--build-property";
pub const CLEAN_FLAG: &str = "--clean";
pub const CONFIG_FLAG: &str = "--config";
pub const DAEMONIZE: &str = "--daemonize";
pub const DEBUG_FLAG: &str = "--debug";
pub const DEBUG_FILTER: &str = "--debug-filter";
pub const DESCRIBE: &str = "--describe";
pub const DEST_DIR: &str = "--dest-dir";
pub const DEST_FILE: &str = "--dest-file";
pub const DISCOVERY_TIMEOUT: &str = "--discovery-timeout";
pub const DUMP_PROFILE: &str = "--dump-profile";
pub const ENCRYPT_KEY: &str = "--encrypt-key";
pub const EXPORT_BINARIES: &str = "--export-binaries";
pub const FQBN: &str = "--fqbn";
pub const FULL: &str = "--full";
pub const GIT_URL: &str = "--git-url";
pub const INCLUDE_BUILD_DIR: &str = "--include-build-dir";
pub const INFO: &str = "--info";
pub const INPUT_DIR: &str = "--input-dir";
pub const INPUT_FILE: &str = "--input-file";
pub const INTERPRETER: &str = "--interpreter";
pub const JOBS: &str = "--jobs";
pub const KEYS_KEYCHAIN: &str = "--keys-keychain";
pub const LIBRARIES: &str = "--libraries";
pub const LIBRARY: &str = "--library";
pub const LIST_PROGRAMMERS: &str = "--list-programmers";
pub const NAMES: &str = "--names";
pub const NO_DEPS: &str = "--no-deps";
pub const NO_DESCRIPTIONS: &str = "--no-descriptions";
pub const NO_OVERWRITE: &str = "--no-overwrite";
pub const OMIT_RELEASES_DETAILS: &str = "--omit-releases-details";
pub const ONLY_COMPILATION_DATABASE: &str = "--only-compilation-database";
pub const OPTIMIZE_FOR_DEBUG: &str = "--optimize-for-debug";
pub const OUTPUT_DIR: &str = "--output-dir";
pub const OVERWRITE: &str = "--overwrite";
pub const PORT: &str = "--port";
pub const PREPROCESS: &str = "--preprocess";
pub const PROFILE: &str = "--profile";
pub const PROGRAMMER: &str = "--programmer";
pub const PROTOCOL: &str = "--protocol";
pub const QUIET: &str = "--quiet";
pub const RAW: &str = "--raw";
pub const RUN_POST_INSTALL: &str = "--run-post-install";
pub const SHOW_HIDDEN: &str = "--show-hidden";
pub const SHOW_OUTDATED: &str = "--show-outdated";
pub const SHOW_PROPERTIES: &str = "--show-properties";
pub const SIGN_KEY: &str = "--sign-key";
pub const SKIP_POST_INSTALL: &str = "--skip-post-install";
pub const TIMESTAMP: &str = "--timestamp";
pub const UPDATABLE: &str = "--updatable";
pub const UPLOAD_FLAG: &str = "--upload";
pub const UPLOAD_PROPERTY: &str = "--upload-property";
pub const VERIFY: &str = "--verify";
pub const WARNINGS: &str = "--warnings";
pub const WATCH: &str = "--watch";
pub const ZIP_PATH: &str = "--zip-path";

// Configuration keys pinned by the default installation layout
pub const KEY_DIRECTORIES_DATA: &str = "directories.data";
pub const KEY_DIRECTORIES_USER: &str = "directories.user";
