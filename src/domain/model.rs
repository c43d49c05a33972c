use crate::domain::entity::{take_attribute, Entity, Item};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

/// Missing fields in an inbound body default to empty strings so that field
/// validation, not parsing, rejects them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Employee {
    #[serde(rename = "employeeid")]
    pub employee_id: String,
    #[serde(rename = "firstname")]
    pub first_name: String,
    #[serde(rename = "lastname")]
    pub last_name: String,
    #[serde(rename = "employeetype")]
    pub employee_type: String,
}

impl Entity for Employee {
    const KEY_ATTRIBUTE: &'static str = "EmployeeID";

    fn key(&self) -> &str {
        &self.employee_id
    }

    fn to_item(&self) -> Item {
        Item::from([
            (Self::KEY_ATTRIBUTE.to_string(), self.employee_id.clone()),
            ("FirstName".to_string(), self.first_name.clone()),
            ("LastName".to_string(), self.last_name.clone()),
            ("EmployeeType".to_string(), self.employee_type.clone()),
        ])
    }

    fn from_item(table: &str, mut item: Item) -> Result<Self> {
        Ok(Self {
            employee_id: take_attribute(&mut item, table, Self::KEY_ATTRIBUTE)?,
            first_name: take_attribute(&mut item, table, "FirstName")?,
            last_name: take_attribute(&mut item, table, "LastName")?,
            employee_type: take_attribute(&mut item, table, "EmployeeType")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub isbn: String,
    pub title: String,
    pub author: String,
}

impl Entity for Book {
    const KEY_ATTRIBUTE: &'static str = "ISBN";

    fn key(&self) -> &str {
        &self.isbn
    }

    fn to_item(&self) -> Item {
        Item::from([
            (Self::KEY_ATTRIBUTE.to_string(), self.isbn.clone()),
            ("Title".to_string(), self.title.clone()),
            ("Author".to_string(), self.author.clone()),
        ])
    }

    fn from_item(table: &str, mut item: Item) -> Result<Self> {
        Ok(Self {
            isbn: take_attribute(&mut item, table, Self::KEY_ATTRIBUTE)?,
            title: take_attribute(&mut item, table, "Title")?,
            author: take_attribute(&mut item, table, "Author")?,
        })
    }
}

/// A rostered shift. Fields are not designed yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ApiError;

    #[test]
    fn test_employee_wire_names() {
        let employee = Employee {
            employee_id: "123-0000000001".to_string(),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            employee_type: "C".to_string(),
        };

        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "employeeid": "123-0000000001",
                "firstname": "A",
                "lastname": "B",
                "employeetype": "C"
            })
        );
    }

    #[test]
    fn test_employee_missing_fields_default_to_empty() {
        let employee: Employee =
            serde_json::from_str(r#"{"employeeid": "123-0000000001", "extra": true}"#).unwrap();
        assert_eq!(employee.employee_id, "123-0000000001");
        assert!(employee.first_name.is_empty());
        assert!(employee.employee_type.is_empty());
    }

    #[test]
    fn test_employee_item_attributes() {
        let employee = Employee {
            employee_id: "123-0000000001".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            employee_type: "casual".to_string(),
        };

        let item = employee.to_item();
        assert_eq!(item.get("EmployeeID").map(String::as_str), Some("123-0000000001"));
        assert_eq!(item.get("FirstName").map(String::as_str), Some("Ada"));
        assert_eq!(item.get("EmployeeType").map(String::as_str), Some("casual"));

        assert_eq!(Employee::from_item("Employees", item).unwrap(), employee);
    }

    #[test]
    fn test_corrupt_item_is_rejected() {
        let mut item = Item::new();
        item.insert("ISBN".to_string(), "978-1292292838".to_string());
        item.insert("Title".to_string(), "Meditations".to_string());

        let err = Book::from_item("Books", item).unwrap_err();
        assert!(matches!(
            err,
            ApiError::MissingAttribute { ref attribute, .. } if attribute == "Author"
        ));
    }
}
