pub mod release;
pub mod upload_docs;
