use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

use crate::server::{
    data::author::AuthorRepository,
    model::author::{CreateAuthorParam, GetAuthorsParam},
    representation::property_mapping::{OrderingStep, SortDirection},
};

mod delete;
mod exists;
mod find_by_id;
mod find_by_ids;
mod get_paginated;
mod insert;

fn author_param(first_name: &str, last_name: &str, birth_year: i32, genre: &str) -> CreateAuthorParam {
    CreateAuthorParam {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(birth_year, 6, 1).unwrap(),
        date_of_death: None,
        genre: genre.to_string(),
    }
}

fn page_param(page_number: u64, page_size: u64) -> GetAuthorsParam {
    GetAuthorsParam {
        page_number,
        page_size,
        genre: None,
        search_query: None,
        ordering: Vec::new(),
    }
}
