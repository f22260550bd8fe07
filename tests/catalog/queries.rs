//! Search, filter, sort, page and the combined advanced query through the
//! repository trait.

use book_catalog::query::{
    AdvancedQuery, BookFilter, Page, PriceRange, SortDirection, SortField, SortSpec,
};
use book_catalog::{BookPatch, BookRepository, NewBook};

use crate::support::{abc_repo, ids, sample_repo, titles};

#[test]
fn empty_search_matches_list() {
    let repo = sample_repo();
    assert_eq!(
        repo.search_by_title("").unwrap().len(),
        repo.list().unwrap().len()
    );
}

#[test]
fn search_ignores_case() {
    let repo = sample_repo();
    let found = repo.search_by_title("clean").unwrap();
    assert_eq!(titles(&found), vec!["Clean Code", "Clean Architecture"]);

    let found = repo.search_by_title("SPRING").unwrap();
    assert_eq!(ids(&found), vec![1, 7]);
}

#[test]
fn search_without_matches_is_empty() {
    let repo = sample_repo();
    assert!(repo.search_by_title("haskell").unwrap().is_empty());
}

#[test]
fn price_range_is_inclusive() {
    let repo = sample_repo();
    let books = repo
        .filter_by_price(PriceRange::new(Some(40.0), Some(50.0)))
        .unwrap();
    assert!(!books.is_empty());
    assert!(books.iter().all(|b| b.price >= 40.0 && b.price <= 50.0));
    assert_eq!(ids(&books), vec![2, 3, 4, 7, 9, 10]);
}

#[test]
fn open_price_range_returns_all() {
    let repo = sample_repo();
    assert_eq!(repo.filter_by_price(PriceRange::default()).unwrap().len(), 15);
}

#[test]
fn min_above_max_is_empty() {
    let repo = sample_repo();
    assert!(repo
        .filter_by_price(PriceRange::new(Some(50.0), Some(40.0)))
        .unwrap()
        .is_empty());
}

#[test]
fn sorted_by_title_ascending() {
    let repo = sample_repo();
    let books = repo.sorted(SortSpec::default()).unwrap();
    let sorted_titles = titles(&books);
    let mut expected = sorted_titles.clone();
    expected.sort();
    assert_eq!(sorted_titles, expected);
    assert_eq!(books[0].title, "Automate the Boring Stuff");
}

#[test]
fn sorted_by_author_descending_keeps_ties_in_order() {
    let repo = sample_repo();
    let books = repo
        .sorted(SortSpec::new(SortField::Author, SortDirection::Desc))
        .unwrap();

    assert!(books.windows(2).all(|w| w[0].author >= w[1].author));
    let martins: Vec<i64> = books
        .iter()
        .filter(|b| b.author == "Robert Martin")
        .map(|b| b.id)
        .collect();
    assert_eq!(martins, vec![3, 8]);
}

#[test]
fn basic_sort_does_not_accept_price() {
    let spec = SortSpec::from_params("price", "asc", SortField::BASIC);
    assert_eq!(spec.field, SortField::Title);
}

#[test]
fn sort_does_not_mutate_collection() {
    let repo = sample_repo();
    repo.sorted(SortSpec::new(SortField::Price, SortDirection::Asc))
        .unwrap();
    assert_eq!(ids(&repo.list().unwrap()), (1..=15).collect::<Vec<i64>>());
}

#[test]
fn second_page_of_fifteen() {
    let repo = sample_repo();
    let page = repo.page(Page::new(1, 5)).unwrap();
    assert_eq!(ids(&page), vec![6, 7, 8, 9, 10]);
}

#[test]
fn zero_sized_page_is_empty() {
    let repo = sample_repo();
    assert!(repo.page(Page::new(0, 0)).unwrap().is_empty());
}

#[test]
fn advanced_query_filters_then_sorts_then_pages() {
    let repo = abc_repo();
    let query = AdvancedQuery {
        filter: BookFilter {
            price: PriceRange::new(Some(15.0), None),
            ..Default::default()
        },
        sort: SortSpec::from_params("price", "desc", SortField::ALL),
        page: Page::new(0, 1),
    };

    let books = repo.query(&query).unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title, "C");
    assert_eq!(books[0].price, 30.0);
}

#[test]
fn advanced_price_desc_is_non_increasing() {
    let repo = sample_repo();
    let query = AdvancedQuery {
        sort: SortSpec::from_params("price", "DESC", SortField::ALL),
        page: Page::new(0, 15),
        ..Default::default()
    };
    let books = repo.query(&query).unwrap();
    assert_eq!(books.len(), 15);
    assert!(books.windows(2).all(|w| w[0].price >= w[1].price));
}

#[test]
fn advanced_unknown_field_sorts_by_title() {
    let repo = sample_repo();
    let bogus = AdvancedQuery {
        sort: SortSpec::from_params("bogus", "asc", SortField::ALL),
        page: Page::new(0, 15),
        ..Default::default()
    };
    let by_title = AdvancedQuery {
        sort: SortSpec::new(SortField::Title, SortDirection::Asc),
        page: Page::new(0, 15),
        ..Default::default()
    };
    assert_eq!(repo.query(&bogus).unwrap(), repo.query(&by_title).unwrap());
}

#[test]
fn advanced_author_and_title_filters_combine() {
    let repo = sample_repo();
    let query = AdvancedQuery {
        filter: BookFilter {
            title: Some("spring".into()),
            author: Some("WALLS".into()),
            price: PriceRange::new(None, Some(40.0)),
        },
        ..Default::default()
    };
    let books = repo.query(&query).unwrap();
    assert_eq!(titles(&books), vec!["Spring Boot in Action"]);
}

#[test]
fn queries_observe_mutations() {
    let repo = sample_repo();
    repo.patch(13, BookPatch::default().price(100.0)).unwrap();
    repo.create(NewBook::new("Zero to Production", "Luca Palmieri", 45.0))
        .unwrap();

    let query = AdvancedQuery {
        sort: SortSpec::new(SortField::Price, SortDirection::Desc),
        page: Page::new(0, 2),
        ..Default::default()
    };
    let books = repo.query(&query).unwrap();
    assert_eq!(titles(&books), vec!["Eloquent JavaScript", "Design Patterns"]);
}
