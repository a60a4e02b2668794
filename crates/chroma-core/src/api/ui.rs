use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
};

pub async fn index_page() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html")],
        r#"<!DOCTYPE html>
        <html lang="en">
        <head>
            <meta charset="UTF-8">
            <meta name="viewport" content="width=device-width, initial-scale=1.0">
            <title>ChromaCheck</title>
            <link href="https://fonts.googleapis.com/css2?family=Space+Mono:wght@400;700&display=swap" rel="stylesheet">
            <style>
                * { margin: 0; padding: 0; box-sizing: border-box; }

                body {
                    background: #fff;
                    color: #000;
                    font-family: 'Space Mono', monospace;
                    min-height: 100vh;
                }

                .header-bar {
                    padding: 15px 20px;
                    border-bottom: 2px solid #000;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .brand {
                    font-weight: 700;
                    font-size: 1.2rem;
                    letter-spacing: -1px;
                }

                .panel {
                    max-width: 560px;
                    margin: 40px auto;
                    border: 2px solid #000;
                    padding: 24px;
                }

                .panel label {
                    display: block;
                    font-size: 0.8rem;
                    text-transform: uppercase;
                    margin: 16px 0 6px;
                }

                .panel input[type="file"],
                .panel select {
                    width: 100%;
                    border: 2px solid #000;
                    background: #fff;
                    font-family: 'Space Mono', monospace;
                    font-size: 0.9rem;
                    padding: 8px;
                }

                .panel button {
                    margin-top: 20px;
                    width: 100%;
                    background: #000;
                    color: #fff;
                    border: none;
                    padding: 12px;
                    font-family: 'Space Mono', monospace;
                    font-size: 0.9rem;
                    cursor: pointer;
                    transition: all 0.2s;
                }

                .panel button:hover { background: #333; }

                #result {
                    margin-top: 20px;
                    border: 2px dashed #000;
                    padding: 16px;
                    font-size: 0.9rem;
                    display: none;
                    white-space: pre-wrap;
                }

                #result.match { background: #e6ffe6; }
                #result.miss { background: #ffe6e6; }
            </style>
        </head>
        <body>
            <div class="header-bar">
                <div class="brand">CHROMACHECK</div>
                <div>dominant color matcher</div>
            </div>
            <div class="panel">
                <label for="image">Image</label>
                <input type="file" id="image" accept="image/*">

                <label for="target">Target color</label>
                <select id="target">
                    <option>BLACK</option>
                    <option>WHITE</option>
                    <option>GRAY</option>
                    <option>BROWN</option>
                    <option selected>RED</option>
                    <option>ORANGE</option>
                    <option>YELLOW</option>
                    <option>DARK_GREEN</option>
                    <option>GREEN</option>
                    <option>BLUE</option>
                    <option>DARK_BLUE</option>
                    <option>PURPLE</option>
                    <option>DARK_PINK</option>
                    <option>PINK</option>
                </select>

                <button id="analyze">ANALYZE</button>
                <div id="result"></div>
            </div>
            <script>
                const button = document.getElementById('analyze');
                const result = document.getElementById('result');

                button.addEventListener('click', async () => {
                    const file = document.getElementById('image').files[0];
                    const target = document.getElementById('target').value;
                    if (!file) {
                        result.style.display = 'block';
                        result.className = 'miss';
                        result.textContent = 'Pick an image first.';
                        return;
                    }

                    const response = await fetch(
                        '/analyze_color?target_color=' + encodeURIComponent(target),
                        { method: 'POST', body: file }
                    );
                    const data = await response.json();

                    result.style.display = 'block';
                    if (!response.ok) {
                        result.className = 'miss';
                        result.textContent = 'Error: ' + data.error;
                        return;
                    }
                    result.className = data.match ? 'match' : 'miss';
                    result.textContent =
                        'dominant: ' + data.dominant_color +
                        '\ntarget:   ' + data.target_color +
                        '\nmatch:    ' + data.match;
                });
            </script>
        </body>
        </html>"#,
    )
}
