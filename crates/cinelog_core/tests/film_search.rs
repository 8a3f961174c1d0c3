use cinelog_core::db::open_db_in_memory;
use cinelog_core::{
    search_films, Actor, Film, FilmRepository, Gender, RepoError, SqliteFilmRepository,
};
use rusqlite::Connection;

fn seed_catalog(conn: &mut Connection) {
    let mut repo = SqliteFilmRepository::try_new(conn).unwrap();

    let shawshank = Film::new(
        "The Shawshank Redemption",
        "Two imprisoned men bond over a number of years",
        "14.10.1994",
        9,
    )
    .with_actors(vec![
        Actor::new("Tim Robbins", Gender::Man, "16.10.1958"),
        Actor::new("Morgan Freeman", Gender::Man, "01.06.1937"),
    ]);
    repo.add(&shawshank).unwrap();

    let green_mile = Film::new(
        "The Green Mile",
        "A death row guard meets a gentle giant",
        "06.12.1999",
        8,
    )
    .with_actors(vec![Actor::new("Tom Hanks", Gender::Man, "09.07.1956")]);
    repo.add(&green_mile).unwrap();
}

#[test]
fn title_fragment_matches_directly() {
    let mut conn = open_db_in_memory().unwrap();
    seed_catalog(&mut conn);

    let films = search_films(&conn, "Green").unwrap();
    assert_eq!(films.len(), 1);
    assert_eq!(films[0].title, "The Green Mile");
}

#[test]
fn actor_fragment_is_used_only_when_title_pass_is_empty() {
    let mut conn = open_db_in_memory().unwrap();
    seed_catalog(&mut conn);

    let films = search_films(&conn, "Morgan Freeman").unwrap();
    assert_eq!(films.len(), 1);
    assert_eq!(films[0].title, "The Shawshank Redemption");
}

#[test]
fn actor_fallback_covers_films_linked_to_a_matching_actor() {
    let mut conn = open_db_in_memory().unwrap();
    {
        let mut repo = SqliteFilmRepository::try_new(&mut conn).unwrap();
        let film = Film::new("Film X", "an unrelated title", "01.01.2010", 5).with_actors(vec![
            Actor::new("Shawshank Jones", Gender::Man, "02.02.1980"),
        ]);
        repo.add(&film).unwrap();
    }

    // No title contains the fragment, but an actor's name does.
    let films = search_films(&conn, "Shawshank").unwrap();
    assert_eq!(films.len(), 1);
    assert_eq!(films[0].title, "Film X");
}

#[test]
fn no_match_on_either_path_returns_not_found() {
    let mut conn = open_db_in_memory().unwrap();
    seed_catalog(&mut conn);

    let err = search_films(&conn, "zzz-nomatch").unwrap_err();
    assert!(matches!(err, RepoError::NotFound { what: "films" }));
}

#[test]
fn search_on_empty_catalog_returns_not_found() {
    let conn = open_db_in_memory().unwrap();

    let err = search_films(&conn, "anything").unwrap_err();
    assert!(matches!(err, RepoError::NotFound { .. }));
}

#[test]
fn like_metacharacters_match_literally() {
    let mut conn = open_db_in_memory().unwrap();
    {
        let mut repo = SqliteFilmRepository::try_new(&mut conn).unwrap();
        repo.add(&Film::new("50% Off", "a discount story", "01.01.2015", 6))
            .unwrap();
        repo.add(&Film::new("Alpha", "plain title", "01.01.2001", 7))
            .unwrap();
    }

    let films = search_films(&conn, "0% O").unwrap();
    assert_eq!(films.len(), 1);
    assert_eq!(films[0].title, "50% Off");

    // A bare wildcard must not match everything.
    let percent = search_films(&conn, "%").unwrap();
    assert_eq!(percent.len(), 1);
    assert_eq!(percent[0].title, "50% Off");

    let underscore = search_films(&conn, "_").unwrap_err();
    assert!(matches!(underscore, RepoError::NotFound { .. }));
}

#[test]
fn search_results_carry_empty_actor_lists() {
    let mut conn = open_db_in_memory().unwrap();
    seed_catalog(&mut conn);

    let films = search_films(&conn, "Shawshank").unwrap();
    assert!(films.iter().all(|film| film.actors.is_empty()));
}
