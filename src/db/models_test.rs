//! Tests for domain models.

use crate::db::{NewTodo, Page, Todo};

#[test]
fn new_todo_defaults_to_not_completed() {
    let new = NewTodo::default();
    assert!(new.title.is_none());
    assert!(!new.completed);
}

#[test]
fn page_total_pages_rounds_up() {
    let page: Page<Todo> = Page {
        content: vec![],
        page: 0,
        size: 20,
        total_elements: 41,
    };
    assert_eq!(page.total_pages(), 3);
}

#[test]
fn page_total_pages_of_empty_set_is_zero() {
    let page: Page<Todo> = Page {
        content: vec![],
        page: 0,
        size: 20,
        total_elements: 0,
    };
    assert_eq!(page.total_pages(), 0);
}

#[test]
fn page_total_pages_exact_multiple() {
    let page: Page<Todo> = Page {
        content: vec![],
        page: 1,
        size: 10,
        total_elements: 30,
    };
    assert_eq!(page.total_pages(), 3);
}
