#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rpresence::api::wire::{ClockRequest, StatusReply};
use rpresence::api::{AttendanceService, AuthService};
use rpresence::errors::{AppError, AppResult};
use rpresence::models::user::User;
use std::cell::{Cell, RefCell};
use std::env;
use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread::{self, JoinHandle};

/// Binary under test, with HOME pointed at an isolated directory so that no
/// real configuration file is picked up.
pub fn rpr(name: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("rpresence");
    cmd.env("HOME", temp_home(name))
        .env_remove("RPRESENCE_EMAIL")
        .env_remove("RPRESENCE_PASSWORD")
        .env_remove("RUST_LOG");
    cmd
}

/// Create a unique empty home directory inside the system temp dir
pub fn temp_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rpresence_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp home");
    path
}

pub fn alice() -> User {
    User {
        id: "42".into(),
        name: "Alice".into(),
        email: "alice@example.com".into(),
    }
}

// ---------------------------------------------------------------
// Scripted services
// ---------------------------------------------------------------

#[derive(Clone)]
pub enum Reply<T> {
    Ok(T),
    Rejected(String),
    Transport(String),
    Parse(String),
}

impl<T: Clone> Reply<T> {
    fn produce(&self) -> AppResult<T> {
        match self {
            Reply::Ok(v) => Ok(v.clone()),
            Reply::Rejected(m) => Err(AppError::Rejected(m.clone())),
            Reply::Transport(m) => Err(AppError::Transport(m.clone())),
            Reply::Parse(m) => Err(AppError::Parse(m.clone())),
        }
    }
}

pub struct MockAuth {
    pub reply: RefCell<Reply<User>>,
    pub calls: Cell<usize>,
    pub last_email: RefCell<Option<String>>,
}

impl MockAuth {
    pub fn new(reply: Reply<User>) -> Self {
        Self {
            reply: RefCell::new(reply),
            calls: Cell::new(0),
            last_email: RefCell::new(None),
        }
    }

    pub fn accepting(user: User) -> Self {
        Self::new(Reply::Ok(user))
    }

    pub fn set(&self, reply: Reply<User>) {
        *self.reply.borrow_mut() = reply;
    }
}

impl AuthService for MockAuth {
    fn authenticate(&self, email: &str, _password: &str) -> AppResult<User> {
        self.calls.set(self.calls.get() + 1);
        *self.last_email.borrow_mut() = Some(email.to_string());
        self.reply.borrow().produce()
    }
}

pub struct MockAttendance {
    pub status_reply: RefCell<Reply<StatusReply>>,
    pub record_reply: RefCell<Reply<()>>,
    pub status_calls: Cell<usize>,
    pub record_calls: Cell<usize>,
    pub last_employee: RefCell<Option<String>>,
    pub last_request: RefCell<Option<ClockRequest>>,
}

impl MockAttendance {
    pub fn new() -> Self {
        Self {
            status_reply: RefCell::new(Reply::Ok(StatusReply::default())),
            record_reply: RefCell::new(Reply::Ok(())),
            status_calls: Cell::new(0),
            record_calls: Cell::new(0),
            last_employee: RefCell::new(None),
            last_request: RefCell::new(None),
        }
    }

    pub fn set_status(&self, reply: Reply<StatusReply>) {
        *self.status_reply.borrow_mut() = reply;
    }

    pub fn set_record(&self, reply: Reply<()>) {
        *self.record_reply.borrow_mut() = reply;
    }

    pub fn total_calls(&self) -> usize {
        self.status_calls.get() + self.record_calls.get()
    }
}

impl AttendanceService for MockAttendance {
    fn status(&self, employee_id: &str) -> AppResult<StatusReply> {
        self.status_calls.set(self.status_calls.get() + 1);
        *self.last_employee.borrow_mut() = Some(employee_id.to_string());
        self.status_reply.borrow().produce()
    }

    fn record(&self, request: &ClockRequest) -> AppResult<()> {
        self.record_calls.set(self.record_calls.get() + 1);
        *self.last_request.borrow_mut() = Some(request.clone());
        self.record_reply.borrow().produce()
    }
}

// ---------------------------------------------------------------
// One-shot HTTP responder
// ---------------------------------------------------------------

/// Serve exactly one request on a random local port with the given status
/// and JSON body. The handle yields the raw request (head + body).
pub fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
    let (url, handle) = serve_script(&[(status, body)]);
    let single = thread::spawn(move || {
        handle
            .join()
            .expect("responder")
            .pop()
            .unwrap_or_default()
    });
    (url, single)
}

/// Answer one connection per scripted `(status, body)` pair, in order. The
/// handle yields the raw requests in the order they arrived.
pub fn serve_script(replies: &[(&str, &str)]) -> (String, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind local port");
    let addr = listener.local_addr().expect("local addr");
    let responses: Vec<String> = replies
        .iter()
        .map(|(status, body)| {
            format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            )
        })
        .collect();

    let handle = thread::spawn(move || {
        let mut requests = Vec::new();
        for response in responses {
            let (mut stream, _) = listener.accept().expect("accept");
            requests.push(read_request(&mut stream));
            stream.write_all(response.as_bytes()).expect("write response");
            stream.flush().ok();
        }
        requests
    });

    (format!("http://{}", addr), handle)
}

fn read_request(stream: &mut impl Read) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let head_end = loop {
        let n = stream.read(&mut chunk).expect("read request");
        if n == 0 {
            return String::from_utf8_lossy(&buf).to_string();
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = find(&buf, b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..head_end]).to_lowercase();
    let content_length = head
        .lines()
        .find_map(|l| l.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < head_end + content_length {
        let n = stream.read(&mut chunk).expect("read body");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    String::from_utf8_lossy(&buf).to_string()
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// JSON body of a captured request.
pub fn request_body(raw: &str) -> serde_json::Value {
    let body = raw.split("\r\n\r\n").nth(1).unwrap_or("");
    serde_json::from_str(body).expect("request body is JSON")
}
