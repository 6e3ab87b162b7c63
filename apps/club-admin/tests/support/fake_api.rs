//! In-memory backend: scripted GET bodies, a fixed write status and a log of
//! every request made.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use club_admin::client::{ApiClient, ClientError, FormMethod};
use club_admin::domain::FormPayload;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub method: &'static str,
    pub path: String,
    pub parts: Vec<(String, String)>,
}

enum WriteReply {
    Status(u16),
    Unreachable,
}

pub struct FakeApi {
    documents: Mutex<HashMap<String, Value>>,
    write_reply: Mutex<WriteReply>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            documents: Mutex::new(HashMap::new()),
            write_reply: Mutex::new(WriteReply::Status(200)),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl FakeApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Serve `body` for GET `path`. Unscripted paths answer 404.
    pub fn serve(&self, path: &str, body: Value) {
        self.documents
            .lock()
            .unwrap()
            .insert(path.to_string(), body);
    }

    /// Status returned by every POST, PUT and DELETE.
    pub fn reply_to_writes(&self, status: u16) {
        *self.write_reply.lock().unwrap() = WriteReply::Status(status);
    }

    /// Make every write fail before a status is received.
    pub fn fail_writes(&self) {
        *self.write_reply.lock().unwrap() = WriteReply::Unreachable;
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn gets_of(&self, path: &str) -> usize {
        self.calls()
            .iter()
            .filter(|c| c.method == "GET" && c.path == path)
            .count()
    }

    pub fn writes(&self) -> Vec<RecordedCall> {
        self.calls()
            .into_iter()
            .filter(|c| c.method != "GET")
            .collect()
    }

    fn record(&self, method: &'static str, path: &str, parts: Vec<(String, String)>) {
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            path: path.to_string(),
            parts,
        });
    }

    fn write_result(&self) -> Result<u16, ClientError> {
        match *self.write_reply.lock().unwrap() {
            WriteReply::Status(status) => Ok(status),
            WriteReply::Unreachable => {
                Err(ClientError::Transport("connection refused".to_string()))
            }
        }
    }
}

#[async_trait]
impl ApiClient for FakeApi {
    async fn get_json(&self, path: &str) -> Result<Value, ClientError> {
        self.record("GET", path, Vec::new());
        self.documents
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or(ClientError::Status { status: 404 })
    }

    async fn send_form(
        &self,
        method: FormMethod,
        path: &str,
        payload: &FormPayload,
    ) -> Result<u16, ClientError> {
        self.record(method.as_str(), path, payload.parts().to_vec());
        self.write_result()
    }

    async fn delete(&self, path: &str) -> Result<u16, ClientError> {
        self.record("DELETE", path, Vec::new());
        self.write_result()
    }
}
