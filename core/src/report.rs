use probr_common::network::endpoint::Endpoint;

use crate::scanner::ProbeReporter;

/// Writes the sweep's output to the standard streams.
///
/// Result lines go to stdout; the completion marker goes to stderr.
pub struct ConsoleReporter;

impl ProbeReporter for ConsoleReporter {
    fn succeeded(&self, endpoint: &Endpoint) {
        println!("Succeeded on {endpoint}");
    }

    fn failed(&self, endpoint: &Endpoint) {
        println!("Failed on {endpoint}");
    }

    fn finished(&self) {
        eprintln!("Finished");
    }
}
