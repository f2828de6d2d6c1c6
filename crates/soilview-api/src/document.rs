/// The page returned for every request
pub const HELLO_DOCUMENT: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>Document</title>
  </head>
  <body>
    <h1>Hello World!!</h1>
  </body>
</html>
"#;

pub const HTML_CONTENT_TYPE: &str = "text/html";
