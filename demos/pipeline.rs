//! Parses and validates a batch of port numbers without branching at each step.

use outcome::{make_error, make_value, Outcome};

#[derive(Debug, Clone, PartialEq)]
enum PortError {
    NotANumber(String),
    Reserved(u16),
}

fn parse(raw: &str) -> Outcome<u16, PortError> {
    match raw.trim().parse::<u16>() {
        Ok(port) => make_value(port).into(),
        Err(_) => make_error(PortError::NotANumber(raw.to_owned())).into(),
    }
}

fn unreserved(port: u16) -> Outcome<u16, PortError> {
    if port < 1024 {
        make_error(PortError::Reserved(port)).into()
    } else {
        make_value(port).into()
    }
}

fn main() {
    for raw in ["8080", "22", "http", " 65535 "] {
        let report = parse(raw)
            .and_then(unreserved)
            .map(|port| format!("listening on {port}"))
            .join_with(|ok| ok, |err| format!("rejected {raw:?}: {err:?}"));
        println!("{report}");
    }

    // A fallback port recovers the reserved case only.
    let recovered = parse("80")
        .and_then(unreserved)
        .or_else(|err| match err {
            PortError::Reserved(_) => Outcome::<u16, PortError>::from_value(8080),
            other => Outcome::from_error(other),
        });
    println!("recovered: {:?}", recovered.value());
}
