//! Error types

error_chain! {
    foreign_links {
        Io(std::io::Error);
    }
    errors {
        Config(s: String) {
            description("ConfigError")
            display("ConfigError: {}", s)
        }
        Directory(s: String) {
            description("DirectoryError")
            display("DirectoryError: {}", s)
        }
        EngineOpen(s: String) {
            description("EngineOpenError")
            display("EngineOpenError: {}", s)
        }
        EngineStep(s: String) {
            description("EngineStepError")
            display("EngineStepError: {}", s)
        }
    }
}

impl Error {
    pub fn is_config(&self) -> bool {
        match *self.kind() {
            ErrorKind::Config(_) => true,
            _ => false,
        }
    }

    pub fn is_directory(&self) -> bool {
        match *self.kind() {
            ErrorKind::Directory(_) => true,
            _ => false,
        }
    }
}
