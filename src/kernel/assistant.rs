//! Canned assistant: keyword lookup over a fixed priority list.

use std::time::Duration;

pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Function,
    Loop,
    Async,
    React,
    Help,
    General,
}

/// Checked in order; the first keyword contained in the query wins.
pub const KEYWORDS: [(&str, Topic); 5] = [
    ("function", Topic::Function),
    ("loop", Topic::Loop),
    ("async", Topic::Async),
    ("react", Topic::React),
    ("help", Topic::Help),
];

const FUNCTION_REPLY: &str = "Here's a basic function template:\n\nfunction myFunction(param) {\n  // Your code here\n  return param;\n}\n\nOr using arrow function:\nconst myFunction = (param) => {\n  return param;\n};";

const LOOP_REPLY: &str = "Common loop patterns:\n\n// For loop\nfor (let i = 0; i < array.length; i++) {\n  console.log(array[i]);\n}\n\n// For...of loop\nfor (const item of array) {\n  console.log(item);\n}\n\n// While loop\nwhile (condition) {\n  // code\n}";

const ASYNC_REPLY: &str = "Async/await example:\n\nasync function fetchData() {\n  try {\n    const response = await fetch('https://api.example.com');\n    const data = await response.json();\n    return data;\n  } catch (error) {\n    console.error('Error:', error);\n  }\n}";

const REACT_REPLY: &str = "React component template:\n\nimport React, { useState } from 'react';\n\nfunction MyComponent() {\n  const [state, setState] = useState('');\n\n  return (\n    <div>\n      <h1>My Component</h1>\n      <input\n        value={state}\n        onChange={(e) => setState(e.target.value)}\n      />\n    </div>\n  );\n}\n\nexport default MyComponent;";

const HELP_REPLY: &str = "I'm your AI coding assistant! I can help with:\n\n• JavaScript/TypeScript syntax and best practices\n• React components and hooks\n• Async programming patterns\n• Debugging common issues\n• Code optimization suggestions\n• Algorithm explanations\n\nJust describe what you need help with!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantRequest {
    pub id: u64,
    pub query: String,
}

pub fn classify(query: &str) -> Topic {
    let lower = query.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, topic)| *topic)
        .unwrap_or(Topic::General)
}

pub fn respond(query: &str) -> String {
    match classify(query) {
        Topic::Function => FUNCTION_REPLY.to_string(),
        Topic::Loop => LOOP_REPLY.to_string(),
        Topic::Async => ASYNC_REPLY.to_string(),
        Topic::React => REACT_REPLY.to_string(),
        Topic::Help => HELP_REPLY.to_string(),
        Topic::General => general_reply(query),
    }
}

fn general_reply(query: &str) -> String {
    format!(
        "I understand you're asking about: \"{query}\"\n\n\
         Here are some general suggestions:\n\
         • Break down complex problems into smaller parts\n\
         • Use console.log() for debugging\n\
         • Check the browser console for errors\n\
         • Consider using modern JavaScript features\n\n\
         For more specific help, try asking about functions, loops, async code, or React components!"
    )
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/assistant.rs"]
mod tests;
