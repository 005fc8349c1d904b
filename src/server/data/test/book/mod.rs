use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::author::AuthorFactory, factory::book::BookFactory};
use uuid::Uuid;

use crate::server::{
    data::book::BookRepository,
    model::book::{InsertBookParam, UpdateBookParam},
};

mod delete;
mod find_for_author;
mod get_for_author;
mod insert;
mod update;
