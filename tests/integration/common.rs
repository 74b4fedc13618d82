// In-memory stand-in for the figo REST service, plugged in through the Transport seam

use figo_client::error::AppError;
use figo_client::model::http::{RawResponse, Transport};
use figo_client::prelude::*;
use serde_json::{Map, Value, json};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const TOKEN: &str = "ASHWLIkouP2O6_bgA2wWReRhletgWKHYjLqDaqb0LFfamim9RjexTo22ujRIP_cjLiRiSyQXyt2kM1eXU2XLFZQ0Hro15HikJQT_eNeT_9XQ";

#[derive(Default)]
struct Store {
    accounts: Vec<Value>,
    transactions: Vec<Value>,
    payments: Vec<Value>,
    notifications: Vec<Value>,
    next_id: u32,
}

/// Fake figo backend with the demo data set
pub struct FakeFigo {
    store: Mutex<Store>,
    calls: AtomicUsize,
}

impl FakeFigo {
    pub fn new() -> Self {
        let accounts = vec![
            account("A1.1", "Girokonto", 3250.31),
            account("A1.2", "Sparkonto", 15340.0),
            account("A1.3", "Kreditkarte", -120.5),
        ];
        let transactions = vec![
            transaction("T1.1.1", "A1.1", -19.99, "Online shop"),
            transaction("T1.1.2", "A1.1", 2500.0, "Salary"),
            transaction("T1.2.1", "A1.2", 100.0, "Savings transfer"),
        ];
        let payments = vec![json!({
            "payment_id": "P1.1.1",
            "account_id": "A1.1",
            "type": "Transfer",
            "name": "Rent",
            "account_number": "4711951500",
            "bank_code": "90090042",
            "bank_name": "Demobank",
            "amount": 850.0,
            "currency": "EUR",
            "purpose": "Rent October"
        })];
        let notifications = vec![json!({
            "notification_id": "N1.1",
            "observe_key": "/rest/accounts",
            "notify_uri": "http://figo.me/seed",
            "state": "seed"
        })];
        Self {
            store: Mutex::new(Store {
                accounts,
                transactions,
                payments,
                notifications,
                next_id: 100,
            }),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of requests received so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn route(&self, method: &Method, path: &str, body: Option<Value>) -> (u16, Value) {
        let path = path.split('?').next().unwrap_or_default();
        let segments: Vec<&str> = path.trim_start_matches("/rest/").split('/').collect();
        let mut store = self.store.lock().unwrap();

        match (method.as_str(), segments.as_slice()) {
            ("GET", ["accounts"]) => (200, json!({"accounts": store.accounts})),
            ("GET", ["accounts", id]) => match find(&store.accounts, "account_id", id) {
                Some(a) => (200, a.clone()),
                None => not_found(),
            },
            ("GET", ["accounts", id, "balance"]) => match find(&store.accounts, "account_id", id) {
                Some(a) => (200, a["balance"].clone()),
                None => not_found(),
            },
            ("GET", ["transactions"]) => (200, json!({"transactions": store.transactions})),
            ("GET", ["accounts", id, "transactions"]) => {
                if find(&store.accounts, "account_id", id).is_none() {
                    return not_found();
                }
                (200, json!({"transactions": filter(&store.transactions, "account_id", id)}))
            }
            ("GET", ["accounts", a, "transactions", t]) => {
                match find(&store.transactions, "transaction_id", t) {
                    Some(tx) if tx["account_id"] == *a => (200, tx.clone()),
                    _ => not_found(),
                }
            }
            ("GET", ["payments"]) => (200, json!({"payments": store.payments})),
            ("GET", ["accounts", id, "payments"]) => {
                if find(&store.accounts, "account_id", id).is_none() {
                    return not_found();
                }
                (200, json!({"payments": filter(&store.payments, "account_id", id)}))
            }
            ("POST", ["accounts", id, "payments"]) => {
                if find(&store.accounts, "account_id", id).is_none() {
                    return not_found();
                }
                let Some(Value::Object(mut fields)) = body else {
                    return bad_request("payment body missing");
                };
                for required in ["name", "account_number", "bank_code"] {
                    if !fields.contains_key(required) {
                        return bad_request(&format!("{required} is required"));
                    }
                }
                store.next_id += 1;
                let payment_id = format!("P{}.{}", id.trim_start_matches('A'), store.next_id);
                fields.insert("payment_id".into(), json!(payment_id));
                fields.insert("account_id".into(), json!(id));
                let bank_name = bank_name(fields.get("bank_code"));
                fields.insert("bank_name".into(), json!(bank_name));
                fields
                    .entry("currency")
                    .or_insert_with(|| json!("EUR"));
                let payment = Value::Object(fields);
                store.payments.push(payment.clone());
                (201, payment)
            }
            ("GET", ["accounts", a, "payments", p]) => {
                match find(&store.payments, "payment_id", p) {
                    Some(payment) if payment["account_id"] == *a => (200, payment.clone()),
                    _ => not_found(),
                }
            }
            ("PUT", ["accounts", a, "payments", p]) => {
                let Some(Value::Object(fields)) = body else {
                    return bad_request("payment body missing");
                };
                match find_mut(&mut store.payments, "payment_id", p) {
                    Some(payment) if payment["account_id"] == *a => {
                        merge(payment, fields);
                        let bank_name = bank_name(payment.get("bank_code"));
                        payment["bank_name"] = json!(bank_name);
                        (200, payment.clone())
                    }
                    _ => not_found(),
                }
            }
            ("DELETE", ["accounts", a, "payments", p]) => {
                let before = store.payments.len();
                store
                    .payments
                    .retain(|payment| !(payment["payment_id"] == *p && payment["account_id"] == *a));
                if store.payments.len() == before {
                    not_found()
                } else {
                    (204, Value::Null)
                }
            }
            ("GET", ["notifications"]) => (200, json!({"notifications": store.notifications})),
            ("POST", ["notifications"]) => {
                let Some(Value::Object(mut fields)) = body else {
                    return bad_request("notification body missing");
                };
                for required in ["observe_key", "notify_uri"] {
                    if fields.get(required).and_then(Value::as_str).is_none_or(str::is_empty) {
                        return bad_request(&format!("{required} is required"));
                    }
                }
                store.next_id += 1;
                fields.insert("notification_id".into(), json!(format!("N1.{}", store.next_id)));
                let notification = Value::Object(fields);
                store.notifications.push(notification.clone());
                (200, notification)
            }
            ("GET", ["notifications", id]) => match find(&store.notifications, "notification_id", id) {
                Some(n) => (200, n.clone()),
                None => not_found(),
            },
            ("PUT", ["notifications", id]) => {
                let Some(Value::Object(fields)) = body else {
                    return bad_request("notification body missing");
                };
                match find_mut(&mut store.notifications, "notification_id", id) {
                    Some(n) => {
                        merge(n, fields);
                        // the service answers updates without a body
                        (204, Value::Null)
                    }
                    None => not_found(),
                }
            }
            ("DELETE", ["notifications", id]) => {
                let before = store.notifications.len();
                store.notifications.retain(|n| n["notification_id"] != *id);
                if store.notifications.len() == before {
                    not_found()
                } else {
                    (204, Value::Null)
                }
            }
            ("GET", ["user"]) => (
                200,
                json!({
                    "user_id": "U1",
                    "name": "John Doe",
                    "email": "demo@figo.me",
                    "address": {"street": "Ola-Hansson-Str. 11", "postal_code": "22047", "city": "Hamburg", "country": "DE"},
                    "verified_email": true,
                    "send_newsletter": false,
                    "language": "de",
                    "join_date": "2012-04-19T17:25:54Z"
                }),
            ),
            ("POST", ["sync"]) => {
                let state = body
                    .as_ref()
                    .and_then(|b| b.get("state"))
                    .and_then(Value::as_str)
                    .unwrap_or_default();
                if state.is_empty() {
                    return bad_request("state is required");
                }
                store.next_id += 1;
                (200, json!({"task_token": format!("TASK{}", store.next_id)}))
            }
            _ => not_found(),
        }
    }
}

#[async_trait]
impl Transport for FakeFigo {
    async fn execute(
        &self,
        method: Method,
        path: &str,
        token: &str,
        body: Option<String>,
    ) -> Result<RawResponse, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if token != TOKEN {
            let body = json!({"error": "invalid_token", "error_description": "Invalid access token"});
            return Ok(RawResponse::new(StatusCode::UNAUTHORIZED, body.to_string()));
        }
        let body = match body {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(value) => Some(value),
                Err(_) => return Ok(response(bad_request("malformed JSON"))),
            },
            None => None,
        };
        Ok(response(self.route(&method, path, body)))
    }

    fn base_url(&self) -> &str {
        "https://api.figo.me"
    }
}

/// Session of the demo user against a fresh fake
pub fn demo_session() -> Session<FakeFigo> {
    setup_logger();
    Session::with_transport(TOKEN, FakeFigo::new())
}

fn response((status, body): (u16, Value)) -> RawResponse {
    let body = if body.is_null() {
        String::new()
    } else {
        body.to_string()
    };
    RawResponse::new(StatusCode::from_u16(status).unwrap(), body)
}

fn not_found() -> (u16, Value) {
    (
        404,
        json!({"error": {"code": 1002, "message": "Not found", "description": "Entry not found"}}),
    )
}

fn bad_request(message: &str) -> (u16, Value) {
    (
        400,
        json!({"error": {"code": 1000, "message": message, "description": "Bad request", "group": "client"}}),
    )
}

fn bank_name(bank_code: Option<&Value>) -> &'static str {
    match bank_code.and_then(Value::as_str) {
        Some("90090042") => "Demobank",
        _ => "Unknown bank",
    }
}

fn account(id: &str, name: &str, balance: f64) -> Value {
    json!({
        "account_id": id,
        "bank_id": "B1.1",
        "name": name,
        "owner": "John Doe",
        "auto_sync": false,
        "account_number": "4711951500",
        "bank_code": "90090042",
        "bank_name": "Demobank",
        "currency": "EUR",
        "iban": "DE67900900424711951500",
        "bic": "DEMODE01",
        "type": "Giro account",
        "in_total_balance": true,
        "preview": false,
        "balance": {
            "balance": balance,
            "balance_date": "2013-04-11T12:00:00Z",
            "credit_line": 0.0,
            "status": {"code": -1, "message": "Synchronization successful", "sync_timestamp": "2013-04-11T12:00:15Z"}
        }
    })
}

fn transaction(id: &str, account_id: &str, amount: f64, purpose: &str) -> Value {
    json!({
        "transaction_id": id,
        "account_id": account_id,
        "name": "Demo counterpart",
        "amount": amount,
        "currency": "EUR",
        "booking_date": "2013-04-10T12:00:00Z",
        "value_date": "2013-04-10T12:00:00Z",
        "purpose": purpose,
        "type": "Transfer",
        "booked": true,
        "visited": false
    })
}

fn find<'a>(items: &'a [Value], key: &str, id: &str) -> Option<&'a Value> {
    items.iter().find(|item| item[key] == *id)
}

fn find_mut<'a>(items: &'a mut [Value], key: &str, id: &str) -> Option<&'a mut Value> {
    items.iter_mut().find(|item| item[key] == *id)
}

fn filter(items: &[Value], key: &str, id: &str) -> Vec<Value> {
    items.iter().filter(|item| item[key] == *id).cloned().collect()
}

fn merge(target: &mut Value, fields: Map<String, Value>) {
    if let Value::Object(existing) = target {
        existing.extend(fields);
    }
}

/// Session against a mockito server, without client-side rate limiting
pub fn wire_session(server_url: &str) -> Session {
    setup_logger();
    let mut config = Config::with_token("tok", server_url);
    config.rate_limiter.enabled = false;
    Session::from_config(&config).expect("Failed to build session")
}
