use serde::{Deserialize, Serialize};

/// Standard OData collection envelope; every Graph list endpoint pages
/// through `@odata.nextLink`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ListResponse<T> {
    /// The OData context URL
    #[serde(rename = "@odata.context")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub odata_context: Option<String>,
    #[serde(rename = "@odata.nextLink")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_link: Option<String>,
    #[serde(rename = "value")]
    pub value: Vec<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Contact {
    /// The unique identifier of the contact item (opaque string from Graph API)
    #[serde(rename = "id")]
    #[serde(default)]
    pub id: String,

    #[serde(rename = "displayName")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(rename = "givenName")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,

    #[serde(rename = "surname")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,

    #[serde(rename = "department")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,

    #[serde(rename = "officeLocation")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub office_location: Option<String>,

    #[serde(rename = "businessPhones")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_phones: Option<Vec<String>>,

    #[serde(rename = "mobilePhone")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_phone: Option<String>,

    #[serde(rename = "emailAddresses")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_addresses: Option<Vec<TypedEmailAddress>>,

    #[serde(rename = "jobTitle")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TypedEmailAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ContactFolder {
    /// The unique identifier of the contact folder (opaque string from Graph API)
    #[serde(rename = "id")]
    pub id: String,

    /// The display name of the contact folder
    #[serde(rename = "displayName")]
    pub display_name: String,

    /// The ID of the parent folder, if any
    #[serde(rename = "parentFolderId")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_folder_id: Option<String>,
}

/// A group member as returned by the directory; non-user members (nested
/// groups, devices) are distinguished by `@odata.type`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DirectoryMember {
    #[serde(rename = "@odata.type")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,

    #[serde(rename = "id")]
    pub id: String,

    #[serde(rename = "displayName")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(rename = "mail")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mail: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct User {
    #[serde(rename = "id")]
    #[serde(default)]
    pub id: String,

    #[serde(rename = "displayName")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(rename = "mail")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_deserializes_from_graph_json() {
        let json = r#"{
            "id": "AAMkAGI2",
            "displayName": "Jane Doe",
            "givenName": "Jane",
            "surname": "Doe",
            "department": "Sales",
            "officeLocation": "22/1103",
            "businessPhones": ["+1 412 555 0109"],
            "mobilePhone": "+1 412 555 0198",
            "emailAddresses": [{"name": "Jane Doe", "address": "jane.doe@example.com"}],
            "jobTitle": "Account Manager"
        }"#;
        let contact: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(contact.display_name.as_deref(), Some("Jane Doe"));
        assert_eq!(
            contact.business_phones.as_deref(),
            Some(&["+1 412 555 0109".to_string()][..])
        );
        assert_eq!(
            contact.email_addresses.unwrap()[0].address.as_deref(),
            Some("jane.doe@example.com")
        );
    }

    #[test]
    fn test_contact_tolerates_sparse_records() {
        let contact: Contact = serde_json::from_str(r#"{"id": "AAMkAGI3"}"#).unwrap();
        assert!(contact.display_name.is_none());
        assert!(contact.business_phones.is_none());
        assert!(contact.mobile_phone.is_none());
    }

    #[test]
    fn test_list_response_paging_envelope() {
        let json = r#"{
            "@odata.context": "https://graph.microsoft.com/v1.0/$metadata#contacts",
            "@odata.nextLink": "https://graph.microsoft.com/v1.0/users/x/contacts?$skip=10",
            "value": [{"id": "a"}, {"id": "b"}]
        }"#;
        let page: ListResponse<Contact> = serde_json::from_str(json).unwrap();
        assert_eq!(page.value.len(), 2);
        assert!(page.next_link.unwrap().contains("$skip=10"));
    }

    #[test]
    fn test_list_response_last_page_has_no_next_link() {
        let page: ListResponse<ContactFolder> =
            serde_json::from_str(r#"{"value": []}"#).unwrap();
        assert!(page.next_link.is_none());
        assert!(page.value.is_empty());
    }

    #[test]
    fn test_directory_member_carries_odata_type() {
        let json = r##"{
            "@odata.type": "#microsoft.graph.user",
            "id": "87d349ed-44d7-43e1-9a83-5f2406dee5bd",
            "displayName": "John Smith",
            "mail": "john.smith@example.com"
        }"##;
        let member: DirectoryMember = serde_json::from_str(json).unwrap();
        assert_eq!(member.odata_type.as_deref(), Some("#microsoft.graph.user"));
        assert_eq!(member.mail.as_deref(), Some("john.smith@example.com"));
    }
}
