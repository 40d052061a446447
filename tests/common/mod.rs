use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::{json, Value};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use tempfile::TempDir;

/// Canned-response HTTP stub standing in for the analysis service.
/// Routes by request line, serves any number of requests, dies with the
/// test process.
pub struct StubService {
    pub base_url: String,
}

pub fn spawn_stub(analysis: (u16, Value), infrastructure: (u16, Value)) -> StubService {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
    let base_url = format!("http://{}", listener.local_addr().expect("stub addr"));

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { continue };
            let request = read_request(&mut stream);
            let head = String::from_utf8_lossy(&request);
            let (status, body) = if head.starts_with("POST /analyze-location") {
                (analysis.0, analysis.1.clone())
            } else if head.starts_with("GET /infrastructure-context") {
                (infrastructure.0, infrastructure.1.clone())
            } else {
                (404, json!({"message": "not found"}))
            };
            let payload = body.to_string();
            let reason = match status {
                200 => "OK",
                400 => "Bad Request",
                500 => "Internal Server Error",
                _ => "OK",
            };
            let response = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                reason,
                payload.len(),
                payload
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    StubService { base_url }
}

fn read_request(stream: &mut std::net::TcpStream) -> Vec<u8> {
    let mut buf = [0u8; 8192];
    let mut request: Vec<u8> = Vec::new();
    loop {
        match stream.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => {
                request.extend_from_slice(&buf[..n]);
                if let Some(header_end) = find_header_end(&request) {
                    let expected = content_length(&request[..header_end]);
                    if request.len() >= header_end + 4 + expected {
                        break;
                    }
                }
            }
            Err(_) => break,
        }
    }
    request
}

fn find_header_end(request: &[u8]) -> Option<usize> {
    request.windows(4).position(|w| w == b"\r\n\r\n")
}

fn content_length(head: &[u8]) -> usize {
    let head = String::from_utf8_lossy(head);
    head.lines()
        .find_map(|l| {
            let (name, value) = l.split_once(':')?;
            if name.eq_ignore_ascii_case("content-length") {
                value.trim().parse().ok()
            } else {
                None
            }
        })
        .unwrap_or(0)
}

/// A port that nothing is listening on.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe listener");
    let url = format!("http://{}", listener.local_addr().expect("probe addr"));
    drop(listener);
    url
}

pub fn cmd(home: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("sitescope");
    cmd.env("HOME", home.path());
    cmd
}

pub fn analysis_fixture() -> Value {
    json!({
        "location": {
            "latitude": 9.93,
            "longitude": 76.27,
            "ward": "Kadavanthra",
            "district": "Ernakulam",
            "state": "Kerala"
        },
        "risk_tags": [
            {"category": "Flood", "risk_level": "High", "description": "Canal proximity"}
        ],
        "explanations": [
            {
                "category": "Flood",
                "text": ["Within 200 m of a critical canal."],
                "source": "KSDMA",
                "year": "2018"
            }
        ],
        "data_sources": ["KSDMA"]
    })
}

pub fn infrastructure_fixture() -> Value {
    json!({
        "network": "5G Available",
        "water": "Municipal Water Supply Present",
        "healthcare": "Hospital within 5 km",
        "fire_rescue": "Fire station within service radius",
        "density": "High density residential",
        "sanitation": "Open drainage nearby",
        "daily_services": "Limited services",
        "overall_assessment": {
            "status": "high_constraint",
            "reason": [
                "Flood-prone zone / Critical Canal Proximity",
                "Poor sanitation context"
            ]
        }
    })
}
