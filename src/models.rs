//! Frontend Models
//!
//! Data structures matching the inventory API payloads.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Accept a number or a numeric string (decimal columns often arrive as "12.50")
fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().ok_or_else(|| serde::de::Error::custom("number out of range")),
        Value::String(s) => s.trim().parse().map_err(serde::de::Error::custom),
        Value::Null => Ok(0.0),
        other => Err(serde::de::Error::custom(format!("expected a number, got {}", other))),
    }
}

fn lenient_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    lenient_f64(deserializer).map(|v| v.round() as i64)
}

fn lenient_f64_vec<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f64>, D::Error> {
    let values = Vec::<Value>::deserialize(deserializer)?;
    Ok(values
        .into_iter()
        .map(|v| match v {
            Value::Number(n) => n.as_f64().unwrap_or(0.0),
            Value::String(s) => s.trim().parse().unwrap_or(0.0),
            _ => 0.0,
        })
        .collect())
}

/// Labels may be strings or numbers (years, week numbers)
fn stringified<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let values = Vec::<Value>::deserialize(deserializer)?;
    Ok(values.into_iter().map(value_to_string).collect())
}

fn stringified_one<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(value_to_string(Value::deserialize(deserializer)?))
}

fn value_to_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// `{ "data": ... }` wrapper used by list and detail endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

// ========================
// Items
// ========================

/// Inventory item (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub sku: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: f64,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub stock: i64,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub min_stock_level: i64,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub supplier: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Item {
    pub fn is_low_stock(&self) -> bool {
        self.stock < self.min_stock_level
    }

    pub fn category_name(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }
}

/// Body of item create and update requests
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPayload {
    pub name: String,
    pub sku: String,
    pub category: Option<String>,
    pub price: f64,
    pub stock: i64,
    pub min_stock_level: i64,
    pub location: Option<String>,
    pub supplier: Option<String>,
}

/// Direction of a stock movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockType {
    In,
    Out,
}

impl StockType {
    pub fn title(&self) -> &'static str {
        match self {
            StockType::In => "Stock In",
            StockType::Out => "Stock Out",
        }
    }

    /// Verb phrase for the quantity prompt
    pub fn prompt_verb(&self) -> &'static str {
        match self {
            StockType::In => "add to",
            StockType::Out => "remove from",
        }
    }
}

/// Stock movement record
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StockHistory {
    pub id: u64,
    #[serde(default)]
    pub item_id: Option<u64>,
    #[serde(rename = "type")]
    pub kind: StockType,
    #[serde(deserialize_with = "lenient_i64")]
    pub quantity: i64,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of a stock adjustment request
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StockAdjustment {
    #[serde(rename = "type")]
    pub kind: StockType,
    pub quantity: i64,
}

// ========================
// Charts
// ========================

/// Dataset colours: one value or one per point
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    One(String),
    Many(Vec<String>),
}

impl ColorSpec {
    pub fn first(&self) -> Option<&str> {
        match self {
            ColorSpec::One(c) => Some(c.as_str()),
            ColorSpec::Many(cs) => cs.first().map(String::as_str),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64_vec")]
    pub data: Vec<f64>,
    #[serde(default)]
    pub border_color: Option<ColorSpec>,
    #[serde(default)]
    pub background_color: Option<ColorSpec>,
}

/// Labelled chart series as produced by the API
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChartData {
    #[serde(default, deserialize_with = "stringified")]
    pub labels: Vec<String>,
    #[serde(default)]
    pub datasets: Vec<Dataset>,
}

/// Time bucket of a trend series
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrendPeriod {
    Daily,
    #[default]
    Weekly,
    Monthly,
    Yearly,
}

impl TrendPeriod {
    pub const ALL: [TrendPeriod; 4] = [TrendPeriod::Daily, TrendPeriod::Weekly, TrendPeriod::Monthly, TrendPeriod::Yearly];

    /// Query parameter value
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendPeriod::Daily => "daily",
            TrendPeriod::Weekly => "weekly",
            TrendPeriod::Monthly => "monthly",
            TrendPeriod::Yearly => "yearly",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrendPeriod::Daily => "Daily",
            TrendPeriod::Weekly => "Weekly",
            TrendPeriod::Monthly => "Monthly",
            TrendPeriod::Yearly => "Yearly",
        }
    }
}

// ========================
// Dashboard
// ========================

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardSummary {
    #[serde(deserialize_with = "lenient_i64")]
    pub total_items: i64,
    #[serde(deserialize_with = "lenient_i64")]
    pub low_stock: i64,
    #[serde(deserialize_with = "lenient_i64")]
    pub recent_orders: i64,
    #[serde(deserialize_with = "lenient_f64")]
    pub total_value: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryCount {
    #[serde(default, deserialize_with = "stringified_one")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub count: f64,
}

/// Kind of a recent activity entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Added,
    Removed,
    #[default]
    #[serde(other)]
    Updated,
}

impl ActivityKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            ActivityKind::Added => "activity-dot added",
            ActivityKind::Removed => "activity-dot removed",
            ActivityKind::Updated => "activity-dot updated",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Activity {
    #[serde(default, deserialize_with = "stringified_one")]
    pub id: String,
    #[serde(default, rename = "type")]
    pub kind: ActivityKind,
    #[serde(default, deserialize_with = "stringified_one")]
    pub item: String,
    #[serde(default, deserialize_with = "stringified_one")]
    pub quantity: String,
    #[serde(default, deserialize_with = "stringified_one")]
    pub date: String,
}

/// Full dashboard payload
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Dashboard {
    pub summary: DashboardSummary,
    pub category_data: Vec<CategoryCount>,
    pub trend_data: ChartData,
    pub transaction_data: ChartData,
    pub recent_activity: Vec<Activity>,
}

// ========================
// Users
// ========================

/// User role as stored by the API
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Manager,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::User, Role::Manager, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Manager => "manager",
            Role::Admin => "admin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Manager => "Manager",
            Role::Admin => "Admin",
        }
    }

    /// Unknown values fall back to `User`
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "manager" => Role::Manager,
            "admin" => Role::Admin,
            _ => Role::User,
        }
    }
}

fn role_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Role, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?
        .map(|r| Role::parse(&r))
        .unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, deserialize_with = "role_or_default")]
    pub role: Role,
    #[serde(default, alias = "profile_picture")]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// The current user arrives in one of three shapes
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum UserEnvelope {
    Data { data: User },
    Wrapped { user: User },
    Bare(User),
}

impl UserEnvelope {
    pub fn into_user(self) -> User {
        match self {
            UserEnvelope::Data { data } => data,
            UserEnvelope::Wrapped { user } => user,
            UserEnvelope::Bare(user) => user,
        }
    }
}

/// User list response; unknown shapes become an empty list
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum UserList {
    Data { data: Vec<User> },
    Users { users: Vec<User> },
    Other(Value),
}

impl UserList {
    pub fn into_users(self) -> Vec<User> {
        match self {
            UserList::Data { data } => data,
            UserList::Users { users } => users,
            UserList::Other(_) => Vec::new(),
        }
    }
}

// ========================
// Auth
// ========================

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub user: Option<User>,
}

/// New account fields (sent as multipart)
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub agree_terms: bool,
}

/// Profile fields (sent as multipart)
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PasswordChange {
    pub current: String,
    pub new: String,
}

/// An image picked from a file input, read into memory
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Picture input state; a read still in flight blocks submission
#[derive(Debug, Clone, Default, PartialEq)]
pub enum PickedImage {
    #[default]
    Empty,
    Reading,
    Ready(ImageUpload),
}

impl PickedImage {
    pub fn is_reading(&self) -> bool {
        matches!(self, PickedImage::Reading)
    }

    pub fn upload(&self) -> Option<ImageUpload> {
        match self {
            PickedImage::Ready(upload) => Some(upload.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_accepts_string_price() {
        let item: Item = serde_json::from_value(json!({
            "id": 4,
            "name": "Desk Lamp",
            "sku": "LMP-01",
            "category": "Home",
            "price": "12500.50",
            "stock": 3,
            "min_stock_level": 5,
            "location": null,
            "supplier": "Acme",
            "updated_at": "2024-05-02T10:00:00.000000Z"
        }))
        .unwrap();
        assert_eq!(item.price, 12500.5);
        assert!(item.is_low_stock());
        assert_eq!(item.location, None);
        assert_eq!(item.category_name(), "Home");
    }

    #[test]
    fn test_item_missing_optional_fields() {
        let item: Item = serde_json::from_value(json!({ "id": 1, "name": "Cable", "sku": "C-1" })).unwrap();
        assert_eq!(item.price, 0.0);
        assert_eq!(item.stock, 0);
        assert!(!item.is_low_stock());
        assert_eq!(item.category_name(), "");
    }

    #[test]
    fn test_item_payload_uses_camel_case() {
        let payload = ItemPayload {
            name: "Chair".into(),
            sku: "CH-2".into(),
            category: None,
            price: 45.0,
            stock: 10,
            min_stock_level: 2,
            location: Some("Aisle 4".into()),
            supplier: None,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["minStockLevel"], 2);
        assert_eq!(value["category"], Value::Null);
        assert!(value.get("min_stock_level").is_none());
    }

    #[test]
    fn test_stock_history_and_adjustment() {
        let history: DataEnvelope<Vec<StockHistory>> = serde_json::from_value(json!({
            "data": [
                { "id": 1, "item_id": 4, "type": "in", "quantity": 10, "created_at": "2024-05-01 08:00:00" },
                { "id": 2, "item_id": 4, "type": "out", "quantity": "3" }
            ]
        }))
        .unwrap();
        assert_eq!(history.data[0].kind, StockType::In);
        assert_eq!(history.data[1].kind, StockType::Out);
        assert_eq!(history.data[1].quantity, 3);

        let body = serde_json::to_value(StockAdjustment { kind: StockType::Out, quantity: 2 }).unwrap();
        assert_eq!(body, json!({ "type": "out", "quantity": 2 }));
    }

    #[test]
    fn test_dashboard_payload() {
        let dashboard: Dashboard = serde_json::from_value(json!({
            "summary": { "totalItems": 42, "lowStock": 3, "recentOrders": 7, "totalValue": "1500000.75" },
            "categoryData": [ { "category": "Food", "count": 12 }, { "category": null, "count": "2" } ],
            "trendData": {
                "labels": ["Mon", "Tue"],
                "datasets": [ { "label": "Value", "data": [100, "250.5"], "borderColor": "rgb(1, 2, 3)" } ]
            },
            "transactionData": {
                "labels": [2023, 2024],
                "datasets": [ { "label": "In", "data": [1, 2], "backgroundColor": ["#111", "#222"] } ]
            },
            "recentActivity": [
                { "id": 9, "type": "added", "item": "Chair", "quantity": 5, "date": "2 hours ago" },
                { "id": "x", "type": "adjusted", "item": "Desk", "quantity": "-1", "date": "yesterday" }
            ]
        }))
        .unwrap();

        assert_eq!(dashboard.summary.total_items, 42);
        assert_eq!(dashboard.summary.total_value, 1500000.75);
        assert_eq!(dashboard.category_data[1].category, "");
        assert_eq!(dashboard.category_data[1].count, 2.0);
        assert_eq!(dashboard.trend_data.datasets[0].data, vec![100.0, 250.5]);
        assert_eq!(dashboard.transaction_data.labels, vec!["2023", "2024"]);
        assert_eq!(
            dashboard.transaction_data.datasets[0].background_color.as_ref().and_then(|c| c.first()),
            Some("#111")
        );
        assert_eq!(dashboard.recent_activity[0].id, "9");
        assert_eq!(dashboard.recent_activity[0].quantity, "5");
        assert_eq!(dashboard.recent_activity[1].kind, ActivityKind::Updated);
    }

    #[test]
    fn test_activity_without_type_or_id() {
        let dashboard: Dashboard = serde_json::from_value(json!({
            "recentActivity": [
                { "item": "Chair", "quantity": 2, "date": "today" },
                { "id": 4, "type": "removed", "item": "Desk" }
            ]
        }))
        .unwrap();

        assert_eq!(dashboard.recent_activity.len(), 2);
        assert_eq!(dashboard.recent_activity[0].kind, ActivityKind::Updated);
        assert_eq!(dashboard.recent_activity[0].id, "");
        assert_eq!(dashboard.recent_activity[0].item, "Chair");
        assert_eq!(dashboard.recent_activity[1].kind, ActivityKind::Removed);
    }

    #[test]
    fn test_dashboard_tolerates_missing_sections() {
        let dashboard: Dashboard = serde_json::from_value(json!({ "summary": { "totalItems": 1 } })).unwrap();
        assert_eq!(dashboard.summary.total_items, 1);
        assert_eq!(dashboard.summary.low_stock, 0);
        assert!(dashboard.category_data.is_empty());
        assert!(dashboard.trend_data.labels.is_empty());
    }

    #[test]
    fn test_user_envelope_shapes() {
        let bare = json!({ "id": 1, "name": "Awa", "email": "awa@example.com", "role": "admin" });
        let data: UserEnvelope = serde_json::from_value(json!({ "data": bare.clone() })).unwrap();
        let wrapped: UserEnvelope = serde_json::from_value(json!({ "user": bare.clone() })).unwrap();
        let plain: UserEnvelope = serde_json::from_value(bare).unwrap();

        for envelope in [data, wrapped, plain] {
            let user = envelope.into_user();
            assert_eq!(user.id, 1);
            assert_eq!(user.role, Role::Admin);
        }
    }

    #[test]
    fn test_user_profile_picture_alias_and_role_default() {
        let user: User = serde_json::from_value(json!({
            "id": 2,
            "name": "Moussa",
            "email": "m@example.com",
            "role": null,
            "profile_picture": "https://cdn.example.com/m.png"
        }))
        .unwrap();
        assert_eq!(user.role, Role::User);
        assert_eq!(user.profile_image.as_deref(), Some("https://cdn.example.com/m.png"));

        let unknown: User = serde_json::from_value(json!({ "id": 3, "role": "owner" })).unwrap();
        assert_eq!(unknown.role, Role::User);
    }

    #[test]
    fn test_user_list_shapes() {
        let from_data: UserList = serde_json::from_value(json!({ "data": [ { "id": 1 } ] })).unwrap();
        assert_eq!(from_data.into_users().len(), 1);

        let from_users: UserList = serde_json::from_value(json!({ "users": [ { "id": 1 }, { "id": 2 } ] })).unwrap();
        assert_eq!(from_users.into_users().len(), 2);

        let neither: UserList = serde_json::from_value(json!({ "message": "ok" })).unwrap();
        assert!(neither.into_users().is_empty());
    }

    #[test]
    fn test_user_list_unknown_shapes_are_empty() {
        let bare: UserList = serde_json::from_value(json!([ { "id": 1 } ])).unwrap();
        assert!(bare.into_users().is_empty());

        let paginated: UserList = serde_json::from_value(json!({ "data": { "current_page": 1 } })).unwrap();
        assert!(paginated.into_users().is_empty());

        let paginated_with_users: UserList =
            serde_json::from_value(json!({ "data": { "current_page": 1 }, "users": [ { "id": 3 } ] })).unwrap();
        assert_eq!(paginated_with_users.into_users().len(), 1);
    }

    #[test]
    fn test_picked_image_states() {
        assert!(!PickedImage::default().is_reading());
        assert_eq!(PickedImage::default().upload(), None);

        assert!(PickedImage::Reading.is_reading());
        assert_eq!(PickedImage::Reading.upload(), None);

        let upload = ImageUpload { file_name: "me.jpg".into(), mime: "image/jpeg".into(), bytes: vec![7] };
        let ready = PickedImage::Ready(upload.clone());
        assert!(!ready.is_reading());
        assert_eq!(ready.upload(), Some(upload));
    }

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse("Manager"), Role::Manager);
        assert_eq!(Role::parse(" admin "), Role::Admin);
        assert_eq!(Role::parse("guest"), Role::User);
        assert_eq!(Role::Admin.as_str(), "admin");
    }
}
