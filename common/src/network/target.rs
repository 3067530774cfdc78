//! # Sweep Input Parsing
//!
//! Turns the two raw configuration values into the inputs of a sweep:
//! * A comma-separated port list (e.g. `"80,443"`).
//! * A host source, one host per line.
//!
//! Hosts may be hostnames or IP literals; they are carried as plain strings
//! and resolved by the connect call itself. Duplicates are kept, each line
//! of the source stands for its own worker.

use std::io::BufRead;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    /// The port specification contained no usable tokens.
    #[error("no ports left after parsing the port list")]
    EmptyPortList,
    /// The host source could not be read.
    #[error("failed to read host list: {0}")]
    HostSource(#[from] std::io::Error),
}

/// Splits a comma-separated port specification into its tokens.
///
/// Tokens are trimmed and empty ones dropped; whatever remains is used
/// verbatim to form connection addresses. Numeric validation is left to
/// the connect call: a nonsensical token fails like any closed port.
pub fn parse_port_list(spec: &str) -> Result<Vec<String>, InputError> {
    let ports: Vec<String> = spec
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect();

    if ports.is_empty() {
        return Err(InputError::EmptyPortList);
    }

    Ok(ports)
}

/// Reads the host list, one host per line.
///
/// Lines are trimmed and blank lines skipped.
pub fn read_host_lines(reader: impl BufRead) -> Result<Vec<String>, InputError> {
    let mut hosts: Vec<String> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let host = line.trim();
        if host.is_empty() {
            continue;
        }
        hosts.push(host.to_string());
    }

    Ok(hosts)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
