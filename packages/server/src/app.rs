//! Composition root: builds every repository, client and usecase from a [`Config`].

use std::sync::Arc;

use fitlink_shared::time::{Clock, SystemClock};

use crate::{
    config::Config,
    domain::{
        Exercise, ExerciseSource, FoodNutrition, LookupCache, Meal, MessagePusher, RoomRepository,
        UserRepository, VideoSearchProvider,
    },
    infrastructure::{
        cache::InMemoryLookupCache,
        message_pusher::WebSocketMessagePusher,
        repository::InMemoryRoomRepository,
        upstream::{ExerciseDbClient, NutritionixClient, SpoonacularClient, YouTubeSearchClient},
    },
    ui::{AppState, JwtVerifier},
    usecase::{
        AnalyzeFoodUseCase, ConnectPeerUseCase, DisconnectPeerUseCase, GetDietPlanUseCase,
        GetExercisesUseCase, GetRoomDetailUseCase, GetRoomsUseCase, GetWorkoutPlanUseCase,
        JoinRoomUseCase, RelaySignalUseCase, VideoFinder,
    },
};

/// Wire the application state
///
/// Dependencies are created in order:
/// 1. Repository
/// 2. MessagePusher
/// 3. Upstream clients and caches
/// 4. UseCases
///
/// # Errors
///
/// Fails only if the shared HTTP client cannot be built.
pub fn build_app_state(
    config: &Config,
    users: Arc<dyn UserRepository>,
) -> Result<AppState, reqwest::Error> {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let retry = config.retry_policy();

    // 1. Create Repository (in-memory database)
    let repository: Arc<dyn RoomRepository> =
        Arc::new(InMemoryRoomRepository::new(config.room_capacity()));

    // 2. Create MessagePusher (WebSocket implementation)
    let message_pusher: Arc<dyn MessagePusher> = Arc::new(WebSocketMessagePusher::default());

    // 3. Create upstream clients sharing one connection pool
    let http = reqwest::Client::builder()
        .timeout(config.attempt_timeout())
        .build()?;
    let exercises: Arc<dyn ExerciseSource> = Arc::new(ExerciseDbClient::new(
        http.clone(),
        config.exercise_db_url.clone(),
        config.exercise_db_key.clone(),
        config.exercise_db_host.clone(),
    ));
    let meals = Arc::new(SpoonacularClient::new(
        http.clone(),
        config.spoonacular_url.clone(),
        config.spoonacular_key.clone(),
    ));
    let nutrition = Arc::new(NutritionixClient::new(
        http.clone(),
        config.nutritionix_url.clone(),
        config.nutritionix_app_id.clone(),
        config.nutritionix_app_key.clone(),
    ));
    let video_providers: Vec<Arc<dyn VideoSearchProvider>> = vec![Arc::new(
        YouTubeSearchClient::new(http, config.youtube_url.clone(), config.youtube_key.clone()),
    )];

    // Workout plans and body-part lookups share the exercise cache
    let exercise_cache: Arc<dyn LookupCache<Exercise>> =
        Arc::new(InMemoryLookupCache::<Exercise>::new());

    // 4. Create UseCases
    Ok(AppState {
        connect_peer_usecase: Arc::new(ConnectPeerUseCase::new(message_pusher.clone())),
        join_room_usecase: Arc::new(JoinRoomUseCase::new(
            repository.clone(),
            message_pusher.clone(),
            clock.clone(),
        )),
        relay_signal_usecase: Arc::new(RelaySignalUseCase::new(
            repository.clone(),
            message_pusher.clone(),
        )),
        disconnect_peer_usecase: Arc::new(DisconnectPeerUseCase::new(
            repository.clone(),
            message_pusher,
        )),
        get_rooms_usecase: Arc::new(GetRoomsUseCase::new(repository.clone())),
        get_room_detail_usecase: Arc::new(GetRoomDetailUseCase::new(repository)),
        get_workout_plan_usecase: Arc::new(GetWorkoutPlanUseCase::new(
            users.clone(),
            exercises.clone(),
            exercise_cache.clone(),
            retry,
            clock.clone(),
            config.exercises_per_slot,
        )),
        get_diet_plan_usecase: Arc::new(GetDietPlanUseCase::new(
            users,
            meals,
            Arc::new(InMemoryLookupCache::<Meal>::new()),
            retry,
            VideoFinder::new(
                video_providers,
                Arc::new(InMemoryLookupCache::<String>::new()),
                retry,
            ),
            clock,
        )),
        get_exercises_usecase: Arc::new(GetExercisesUseCase::new(exercises, exercise_cache, retry)),
        analyze_food_usecase: Arc::new(AnalyzeFoodUseCase::new(
            nutrition,
            Arc::new(InMemoryLookupCache::<FoodNutrition>::new()),
            retry,
        )),
        jwt_verifier: Arc::new(JwtVerifier::new(&config.jwt_secret)),
    })
}
