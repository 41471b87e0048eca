mod audio;
mod ids;
mod playlist;
mod playlist_song;
mod song;
mod user;

pub use audio::AudioPayload;
pub use ids::{PlaylistId, PlaylistSongId, UserId, VideoId};
pub use playlist::{CreatePlaylist, Playlist, ProtectionMode, UpdatePlaylist};
pub use playlist_song::{CreatePlaylistSong, PlaylistSong};
pub use song::{format_duration, parse_duration, Song, Thumbnails, TrackWithRecommendations};
pub use user::User;
