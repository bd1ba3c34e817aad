use crate::services::{orchestrator::PageSnapshot, renderer::escape_html};

/// Full page markup around the current container contents.
///
/// While a container is still loading the browser is asked to refresh, which
/// stands in for the script that would otherwise poll.
pub fn render_page(snapshot: &PageSnapshot) -> String {
    let loading = snapshot.generation > 0
        && (!snapshot.ratings.state.is_terminal() || !snapshot.recommendations.state.is_terminal());
    let refresh = if loading {
        "\n<meta http-equiv=\"refresh\" content=\"1\">"
    } else {
        ""
    };
    let uid = snapshot
        .user_id
        .map(|id| id.to_string())
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Movie Recommendations</title>{refresh}
</head>
<body>
<h1>Movie Recommendations</h1>
<form method="post" action="/load">
  <label for="uidBox">User ID</label>
  <input type="number" id="uidBox" name="uid" min="1" value="{uid}">
  <button id="loadBtn" type="submit">Load User</button>
</form>
<h2>Historic Ratings</h2>
<div id="ratingsContainer">{ratings}</div>
<h2>Recommendations</h2>
<div id="recsContainer">{recs}</div>
</body>
</html>
"#,
        refresh = refresh,
        uid = escape_html(&uid),
        ratings = snapshot.ratings.markup,
        recs = snapshot.recommendations.markup,
    )
}
