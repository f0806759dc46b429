use anyhow::Result;
use notebox::domain::{Folder, FolderItem, FolderMap, Note};

#[test]
fn given_note_when_serializing_to_json_then_contains_all_fields() -> Result<()> {
    // Arrange
    let note = Note {
        id: 12,
        title: "O'Brien".to_string(),
        content: "# Heading".to_string(),
        last_modified: "2024-12-17 15:04:05 PM".to_string(),
    };

    // Act
    let json = serde_json::to_string_pretty(&note)?;

    // Assert
    assert!(json.contains(r#""id": 12"#));
    assert!(json.contains(r#""title": "O'Brien""#));
    assert!(json.contains(r##""content": "# Heading""##));
    assert!(json.contains(r#""last_modified": "2024-12-17 15:04:05 PM""#));
    Ok(())
}

#[test]
fn given_folder_when_serializing_then_uses_snake_case_fields() -> Result<()> {
    // Arrange
    let folder = Folder {
        id: 1,
        title: "Work".to_string(),
        last_modified: "2024-12-17 15:04:05 PM".to_string(),
    };

    // Act
    let json = serde_json::to_string(&folder)?;

    // Assert - field names should be snake_case, not camelCase
    assert!(json.contains(r#""last_modified""#));
    assert!(!json.contains(r#""lastModified""#));
    Ok(())
}

#[test]
fn given_edge_when_serializing_then_child_carries_kind_and_id() -> Result<()> {
    // Arrange
    let edge = FolderMap {
        parent_id: 1,
        child: FolderItem::Note(9),
        last_modified: "2024-12-17 15:04:05 PM".to_string(),
    };

    // Act
    let value = serde_json::to_value(&edge)?;

    // Assert
    assert_eq!(value["parent_id"], 1);
    assert_eq!(value["child"]["kind"], "note");
    assert_eq!(value["child"]["id"], 9);
    Ok(())
}
