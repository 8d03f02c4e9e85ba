//! Persistence for book records.
//!
//! Every mutating call is a single statement, so SQLite's autocommit makes
//! each one atomic and durable before it returns.

use libsql::Connection;

use crate::error::StoreError;
use crate::model::{Book, BookChanges, NewBook};

pub type Result<T> = std::result::Result<T, StoreError>;

pub struct BookStore<'a> {
    conn: &'a Connection,
}

impl<'a> BookStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub async fn create(&self, input: NewBook) -> Result<i32> {
        let query = r#"
            INSERT INTO books (book_name, author, publisher)
            VALUES (?, ?, ?)
            RETURNING id
        "#;

        let mut rows = self
            .conn
            .query(
                query,
                libsql::params![input.book_name, input.author, input.publisher],
            )
            .await?;

        match rows.next().await? {
            Some(row) => Ok(row.get(0)?),
            None => Err(StoreError::MalformedRow("insert returned no id".into())),
        }
    }

    pub async fn list_all(&self) -> Result<Vec<Book>> {
        let query = r#"
            SELECT id, book_name, author, publisher
            FROM books
            ORDER BY id
        "#;

        let mut books = Vec::new();
        let mut rows = self.conn.query(query, ()).await?;
        while let Some(row) = rows.next().await? {
            books.push(Self::row_to_book(&row)?);
        }

        Ok(books)
    }

    pub async fn get(&self, id: i32) -> Result<Book> {
        let query = r#"
            SELECT id, book_name, author, publisher
            FROM books WHERE id = ?
        "#;

        let mut rows = self.conn.query(query, libsql::params![id]).await?;
        match rows.next().await? {
            Some(row) => Self::row_to_book(&row),
            None => Err(StoreError::NotFound(id)),
        }
    }

    pub async fn update(&self, id: i32, changes: BookChanges) -> Result<Book> {
        let query = r#"
            UPDATE books SET
                book_name = COALESCE(?, book_name),
                author = COALESCE(?, author),
                publisher = COALESCE(?, publisher)
            WHERE id = ?
            RETURNING id, book_name, author, publisher
        "#;

        let mut rows = self
            .conn
            .query(
                query,
                libsql::params![
                    changes.book_name.as_deref(),
                    changes.author.as_deref(),
                    changes.publisher.as_deref(),
                    id
                ],
            )
            .await?;

        match rows.next().await? {
            Some(row) => Self::row_to_book(&row),
            None => Err(StoreError::NotFound(id)),
        }
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        let deleted = self
            .conn
            .execute("DELETE FROM books WHERE id = ?", libsql::params![id])
            .await?;

        if deleted == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    fn row_to_book(row: &libsql::Row) -> Result<Book> {
        Ok(Book {
            id: row.get(0)?,
            book_name: row.get(1)?,
            author: row.get(2)?,
            publisher: row.get(3)?,
        })
    }
}
