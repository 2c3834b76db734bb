//! Form Validation
//!
//! Client-side checks run before a request is sent. The API stays the
//! authority; these only catch what can be caught without it.

use std::collections::BTreeMap;

use crate::error::ServerFieldErrors;
use crate::models::{Credentials, ItemPayload, PasswordChange, ProfileUpdate, Registration};

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MAX_NAME_LEN: usize = 255;

/// Form field -> first error message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the first message per field
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<String> {
        self.0.get(field).cloned()
    }

    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }

    /// Merge 422 errors from the server, mapping snake_case keys to form keys
    pub fn from_server(errors: &ServerFieldErrors) -> Self {
        let mut out = Self::new();
        for (key, messages) in errors {
            if let Some(first) = messages.first() {
                out.add(&form_field_name(key), first.clone());
            }
        }
        out
    }
}

/// `min_stock_level` -> `minStockLevel`
pub fn form_field_name(server_key: &str) -> String {
    let mut out = String::with_capacity(server_key.len());
    let mut upper = false;
    for c in server_key.chars() {
        if c == '_' {
            upper = !out.is_empty();
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Loose structural check: one `@`, a non-empty local part, a dotted domain
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|l| !l.is_empty())
}

fn check_email(errors: &mut FieldErrors, field: &str, email: &str, required: &str, invalid: &str) {
    if email.trim().is_empty() {
        errors.add(field, required);
    } else if !is_valid_email(email) {
        errors.add(field, invalid);
    }
}

fn check_password(errors: &mut FieldErrors, field: &str, password: &str, required: &str, too_short: &str) {
    if password.is_empty() {
        errors.add(field, required);
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        errors.add(field, too_short);
    }
}

fn none_if_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

// ========================
// Auth forms
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

impl LoginForm {
    pub fn validate(&self) -> Result<Credentials, FieldErrors> {
        let mut errors = FieldErrors::new();
        check_email(&mut errors, "email", &self.email, "Email is required", "Invalid email address");
        check_password(
            &mut errors,
            "password",
            &self.password,
            "Password is required",
            "Password must be at least 6 characters",
        );
        errors.into_result(|| Credentials {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub agree_terms: bool,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<Registration, FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.name.trim().is_empty() {
            errors.add("name", "Name is required");
        }
        check_email(&mut errors, "email", &self.email, "Email is required", "Invalid email");
        check_password(&mut errors, "password", &self.password, "Password is required", "Minimum 6 characters");
        if !self.agree_terms {
            errors.add("agreeTerms", "You must accept the terms");
        }
        errors.into_result(|| Registration {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            agree_terms: self.agree_terms,
        })
    }
}

// ========================
// Item form
// ========================

/// Item categories offered by the form
pub const ITEM_CATEGORIES: &[&str] = &[
    "Electronics",
    "Clothing",
    "Footwear",
    "Furniture",
    "Home",
    "Office Supplies",
    "Food",
    "Other",
];

/// Raw text of the add/edit item form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemForm {
    pub name: String,
    pub sku: String,
    pub category: String,
    pub price: String,
    pub stock: String,
    pub min_stock_level: String,
    pub location: String,
    pub supplier: String,
}

impl ItemForm {
    /// Prefill from an existing item
    pub fn from_item(item: &crate::models::Item) -> Self {
        Self {
            name: item.name.clone(),
            sku: item.sku.clone(),
            category: item.category.clone().unwrap_or_default(),
            price: trim_float(item.price),
            stock: item.stock.to_string(),
            min_stock_level: item.min_stock_level.to_string(),
            location: item.location.clone().unwrap_or_default(),
            supplier: item.supplier.clone().unwrap_or_default(),
        }
    }

    pub fn get(&self, field: &str) -> &str {
        match field {
            "name" => &self.name,
            "sku" => &self.sku,
            "category" => &self.category,
            "price" => &self.price,
            "stock" => &self.stock,
            "minStockLevel" => &self.min_stock_level,
            "location" => &self.location,
            "supplier" => &self.supplier,
            _ => "",
        }
    }

    /// Set a field by its form name; unknown names are ignored
    pub fn set(&mut self, field: &str, value: String) {
        match field {
            "name" => self.name = value,
            "sku" => self.sku = value,
            "category" => self.category = value,
            "price" => self.price = value,
            "stock" => self.stock = value,
            "minStockLevel" => self.min_stock_level = value,
            "location" => self.location = value,
            "supplier" => self.supplier = value,
            _ => {}
        }
    }

    pub fn validate(&self) -> Result<ItemPayload, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.add("name", "Product name is required");
        } else if name.chars().count() > MAX_NAME_LEN {
            errors.add("name", "Product name cannot exceed 255 characters");
        }

        if self.sku.trim().is_empty() {
            errors.add("sku", "SKU is required");
        }

        let price = match parse_number(&self.price) {
            Number::Missing => {
                errors.add("price", "Price is required");
                None
            }
            Number::Invalid => {
                errors.add("price", "Price must be a number");
                None
            }
            Number::Value(v) if v <= 0.0 => {
                errors.add("price", "Price must be positive");
                None
            }
            Number::Value(v) => Some(v),
        };

        let stock = whole_non_negative(&mut errors, "stock", &self.stock, "Stock");
        let min_stock_level =
            whole_non_negative(&mut errors, "minStockLevel", &self.min_stock_level, "Minimum stock level");

        match (price, stock, min_stock_level) {
            (Some(price), Some(stock), Some(min_stock_level)) if errors.is_empty() => Ok(ItemPayload {
                name: name.to_string(),
                sku: self.sku.trim().to_string(),
                category: none_if_blank(&self.category),
                price,
                stock,
                min_stock_level,
                location: none_if_blank(&self.location),
                supplier: none_if_blank(&self.supplier),
            }),
            _ => Err(errors),
        }
    }
}

enum Number {
    Missing,
    Invalid,
    Value(f64),
}

fn parse_number(raw: &str) -> Number {
    let raw = raw.trim();
    if raw.is_empty() {
        return Number::Missing;
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Number::Value(v),
        _ => Number::Invalid,
    }
}

fn whole_non_negative(errors: &mut FieldErrors, field: &str, raw: &str, label: &str) -> Option<i64> {
    match parse_number(raw) {
        Number::Missing => {
            errors.add(field, format!("{} is required", label));
            None
        }
        Number::Invalid => {
            errors.add(field, format!("{} must be a number", label));
            None
        }
        Number::Value(v) if v.fract() != 0.0 => {
            errors.add(field, format!("{} must be a whole number", label));
            None
        }
        Number::Value(v) if v < 0.0 => {
            errors.add(field, format!("{} cannot be negative", label));
            None
        }
        Number::Value(v) => Some(v as i64),
    }
}

/// 12.0 -> "12", 12.5 -> "12.5"
fn trim_float(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

// ========================
// Stock adjustment
// ========================

pub const INVALID_QUANTITY: &str = "Please enter a valid quantity.";

/// Quantity of a stock movement: a positive whole number
pub fn parse_quantity(raw: &str) -> Result<i64, &'static str> {
    match raw.trim().parse::<i64>() {
        Ok(q) if q > 0 => Ok(q),
        _ => Err(INVALID_QUANTITY),
    }
}

// ========================
// Profile forms
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
}

impl ProfileForm {
    pub fn validate(&self) -> Result<ProfileUpdate, FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.name.trim().is_empty() {
            errors.add("name", "Name is required");
        }
        check_email(&mut errors, "email", &self.email, "Email is required", "Invalid email address");
        errors.into_result(|| ProfileUpdate {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PasswordForm {
    pub current: String,
    pub new: String,
    pub confirm: String,
}

impl PasswordForm {
    pub fn validate(&self) -> Result<PasswordChange, FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.current.is_empty() {
            errors.add("current", "Current password is required");
        }
        check_password(
            &mut errors,
            "new",
            &self.new,
            "New password is required",
            "Password must be at least 6 characters",
        );
        if self.new != self.confirm {
            errors.add("confirm", "Passwords do not match.");
        }
        errors.into_result(|| PasswordChange {
            current: self.current.clone(),
            new: self.new.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Item;

    fn valid_item_form() -> ItemForm {
        ItemForm {
            name: "Office Chair".into(),
            sku: "CH-100".into(),
            category: "Furniture".into(),
            price: "45000".into(),
            stock: "12".into(),
            min_stock_level: "3".into(),
            location: "  ".into(),
            supplier: "Sahel Furnishings".into(),
        }
    }

    #[test]
    fn test_email_check() {
        assert!(is_valid_email("awa@example.com"));
        assert!(is_valid_email(" awa.diallo@mail.example.sn "));
        assert!(!is_valid_email("awa@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("awa@@example.com"));
        assert!(!is_valid_email("awa @example.com"));
        assert!(!is_valid_email("awa@example."));
        assert!(!is_valid_email("awa.example.com"));
    }

    #[test]
    fn test_login_form() {
        let empty = LoginForm::default().validate().unwrap_err();
        assert_eq!(empty.get("email").as_deref(), Some("Email is required"));
        assert_eq!(empty.get("password").as_deref(), Some("Password is required"));

        let short = LoginForm { email: "bad".into(), password: "12345".into(), remember_me: false }
            .validate()
            .unwrap_err();
        assert_eq!(short.get("email").as_deref(), Some("Invalid email address"));
        assert_eq!(short.get("password").as_deref(), Some("Password must be at least 6 characters"));

        let ok = LoginForm { email: " a@b.co ".into(), password: "secret".into(), remember_me: true }
            .validate()
            .unwrap();
        assert_eq!(ok.email, "a@b.co");
    }

    #[test]
    fn test_register_form_requires_terms() {
        let form = RegisterForm {
            name: "Awa".into(),
            email: "awa@example.com".into(),
            password: "secret1".into(),
            agree_terms: false,
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("agreeTerms").as_deref(), Some("You must accept the terms"));

        let accepted = RegisterForm { agree_terms: true, ..form };
        assert!(accepted.validate().is_ok());
    }

    #[test]
    fn test_item_form_valid_payload() {
        let payload = valid_item_form().validate().unwrap();
        assert_eq!(payload.price, 45000.0);
        assert_eq!(payload.stock, 12);
        assert_eq!(payload.min_stock_level, 3);
        assert_eq!(payload.category.as_deref(), Some("Furniture"));
        assert_eq!(payload.location, None);
    }

    #[test]
    fn test_item_form_zero_stock_is_allowed() {
        let form = ItemForm { stock: "0".into(), min_stock_level: "0".into(), ..valid_item_form() };
        let payload = form.validate().unwrap();
        assert_eq!(payload.stock, 0);
    }

    #[test]
    fn test_item_form_required_fields() {
        let errors = ItemForm::default().validate().unwrap_err();
        assert_eq!(errors.get("name").as_deref(), Some("Product name is required"));
        assert_eq!(errors.get("sku").as_deref(), Some("SKU is required"));
        assert_eq!(errors.get("price").as_deref(), Some("Price is required"));
        assert_eq!(errors.get("stock").as_deref(), Some("Stock is required"));
        assert_eq!(errors.get("minStockLevel").as_deref(), Some("Minimum stock level is required"));
        assert_eq!(errors.get("category"), None);
    }

    #[test]
    fn test_item_form_number_rules() {
        let form = ItemForm {
            price: "-5".into(),
            stock: "2.5".into(),
            min_stock_level: "-1".into(),
            ..valid_item_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("price").as_deref(), Some("Price must be positive"));
        assert_eq!(errors.get("stock").as_deref(), Some("Stock must be a whole number"));
        assert_eq!(errors.get("minStockLevel").as_deref(), Some("Minimum stock level cannot be negative"));

        let form = ItemForm { price: "abc".into(), stock: "ten".into(), ..valid_item_form() };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("price").as_deref(), Some("Price must be a number"));
        assert_eq!(errors.get("stock").as_deref(), Some("Stock must be a number"));
    }

    #[test]
    fn test_item_form_name_length() {
        let form = ItemForm { name: "x".repeat(256), ..valid_item_form() };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("name").as_deref(), Some("Product name cannot exceed 255 characters"));

        let form = ItemForm { name: "x".repeat(255), ..valid_item_form() };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_item_form_prefill_and_set() {
        let item = Item {
            id: 3,
            name: "Kettle".into(),
            sku: "KT-3".into(),
            category: None,
            price: 7500.0,
            stock: 0,
            min_stock_level: 2,
            location: Some("Shelf 2".into()),
            supplier: None,
            image: None,
            created_at: None,
            updated_at: None,
        };
        let mut form = ItemForm::from_item(&item);
        assert_eq!(form.price, "7500");
        assert_eq!(form.stock, "0");
        assert_eq!(form.category, "");

        form.set("minStockLevel", "9".into());
        form.set("unknown", "ignored".into());
        assert_eq!(form.min_stock_level, "9");
        assert_eq!(form.get("minStockLevel"), "9");
        assert_eq!(form.get("location"), "Shelf 2");
        assert_eq!(form.get("unknown"), "");
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("5"), Ok(5));
        assert_eq!(parse_quantity(" 12 "), Ok(12));
        assert_eq!(parse_quantity("0"), Err(INVALID_QUANTITY));
        assert_eq!(parse_quantity("-3"), Err(INVALID_QUANTITY));
        assert_eq!(parse_quantity("2.5"), Err(INVALID_QUANTITY));
        assert_eq!(parse_quantity(""), Err(INVALID_QUANTITY));
    }

    #[test]
    fn test_password_form() {
        let form = PasswordForm { current: "old-pass".into(), new: "new-pass".into(), confirm: "new-pazz".into() };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("confirm").as_deref(), Some("Passwords do not match."));
        assert_eq!(errors.len(), 1);

        let form = PasswordForm { confirm: "new-pass".into(), ..form };
        let change = form.validate().unwrap();
        assert_eq!(change.new, "new-pass");

        let errors = PasswordForm::default().validate().unwrap_err();
        assert!(errors.get("current").is_some());
        assert!(errors.get("new").is_some());
    }

    #[test]
    fn test_profile_form() {
        let errors = ProfileForm { name: " ".into(), email: "nope".into() }.validate().unwrap_err();
        assert_eq!(errors.get("name").as_deref(), Some("Name is required"));
        assert_eq!(errors.get("email").as_deref(), Some("Invalid email address"));
    }

    #[test]
    fn test_server_errors_mapped_to_form_fields() {
        let mut server = ServerFieldErrors::new();
        server.insert("min_stock_level".into(), vec!["Must be at least 0.".into()]);
        server.insert("sku".into(), vec!["The sku has already been taken.".into(), "second".into()]);
        server.insert("name".into(), vec![]);

        let errors = FieldErrors::from_server(&server);
        assert_eq!(errors.get("minStockLevel").as_deref(), Some("Must be at least 0."));
        assert_eq!(errors.get("sku").as_deref(), Some("The sku has already been taken."));
        assert_eq!(errors.get("name"), None);
    }

    #[test]
    fn test_form_field_name() {
        assert_eq!(form_field_name("min_stock_level"), "minStockLevel");
        assert_eq!(form_field_name("minStockLevel"), "minStockLevel");
        assert_eq!(form_field_name("_private"), "private");
        assert_eq!(form_field_name("sku"), "sku");
    }
}
