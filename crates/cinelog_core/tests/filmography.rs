use cinelog_core::db::open_db_in_memory;
use cinelog_core::{
    actors_with_films, Actor, ActorRepository, Film, FilmRepository, Gender,
    SqliteActorRepository, SqliteFilmRepository,
};

#[test]
fn empty_catalog_yields_no_entries() {
    let conn = open_db_in_memory().unwrap();
    let entries = actors_with_films(&conn).unwrap();
    assert!(entries.is_empty());
}

#[test]
fn every_actor_appears_with_their_films() {
    let mut conn = open_db_in_memory().unwrap();

    {
        let actor_repo = SqliteActorRepository::try_new(&conn).unwrap();
        actor_repo
            .add(&Actor::new("Tim Robbins", Gender::Man, "16.10.1958"))
            .unwrap();
        actor_repo
            .add(&Actor::new("Morgan Freeman", Gender::Man, "01.06.1937"))
            .unwrap();
    }

    {
        let mut film_repo = SqliteFilmRepository::try_new(&mut conn).unwrap();
        let film = Film::new(
            "The Shawshank Redemption",
            "Two imprisoned men bond over a number of years",
            "14.10.1994",
            9,
        )
        .with_actors(vec![
            Actor::new("Tim Robbins", Gender::Man, "16.10.1958"),
            Actor::new("Morgan Freeman", Gender::Man, "01.06.1937"),
        ]);
        film_repo.add(&film).unwrap();
    }

    let entries = actors_with_films(&conn).unwrap();
    assert_eq!(entries.len(), 2);

    let robbins = entries
        .iter()
        .find(|entry| entry.actor.name == "Tim Robbins")
        .expect("Tim Robbins entry should exist");
    assert_eq!(robbins.actor.gender, Gender::Man);
    assert_eq!(robbins.actor.birth_date, "16.10.1958");
    assert!(robbins
        .films
        .iter()
        .any(|film| film.title == "The Shawshank Redemption"));

    let freeman = entries
        .iter()
        .find(|entry| entry.actor.name == "Morgan Freeman")
        .expect("Morgan Freeman entry should exist");
    assert!(freeman
        .films
        .iter()
        .any(|film| film.title == "The Shawshank Redemption"));
}

#[test]
fn actor_without_films_gets_an_empty_list() {
    let conn = open_db_in_memory().unwrap();
    {
        let actor_repo = SqliteActorRepository::try_new(&conn).unwrap();
        actor_repo
            .add(&Actor::new("Unbilled Extra", Gender::Woman, "05.05.1995"))
            .unwrap();
    }

    let entries = actors_with_films(&conn).unwrap();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].films.is_empty());
}

#[test]
fn actor_in_several_films_lists_all_of_them() {
    let mut conn = open_db_in_memory().unwrap();

    {
        let mut film_repo = SqliteFilmRepository::try_new(&mut conn).unwrap();
        let freeman = Actor::new("Morgan Freeman", Gender::Man, "01.06.1937");
        film_repo
            .add(
                &Film::new("Se7en", "two detectives hunt a killer", "22.09.1995", 8)
                    .with_actors(vec![freeman.clone()]),
            )
            .unwrap();
        film_repo
            .add(
                &Film::new("Unforgiven", "an aging outlaw returns", "07.08.1992", 8)
                    .with_actors(vec![freeman]),
            )
            .unwrap();
    }

    let entries = actors_with_films(&conn).unwrap();
    assert_eq!(entries.len(), 1);

    let titles: Vec<&str> = entries[0]
        .films
        .iter()
        .map(|film| film.title.as_str())
        .collect();
    assert!(titles.contains(&"Se7en"));
    assert!(titles.contains(&"Unforgiven"));
}
