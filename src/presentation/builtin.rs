//! Recorridos incluidos en el binario.
//!
//! Cada paso es `(id, título, descripción, zoom, focus_x, focus_y, highlights)`;
//! todos esperan a que el usuario avance (duración 0).

use std::fmt;
use std::str::FromStr;

use llmx_core::FlowStep;

use crate::errors::AppError;

type StepRow = (&'static str, &'static str, &'static str, f64, f64, f64, &'static [&'static str]);

const RAG: &[StepRow] = &[
    ("intro", "Retrieval-Augmented Generation", "Answers improve when the model can read relevant documents first. Follow one question about a thermal camera manual through the pipeline.", 1.0, 50.0, 50.0, &[]),
    ("ingest-docs", "Ingestion: source documents", "Product manuals are loaded into the system to build the knowledge base.", 1.5, 15.0, 25.0, &["documents"]),
    ("ingest-chunk", "Ingestion: chunking", "Documents are cut into chunks of a few hundred tokens so retrieval can point at precise sections.", 2.0, 30.0, 25.0, &["chunker"]),
    ("ingest-embed", "Ingestion: embeddings", "An embedding model turns every chunk into a vector that captures its meaning.", 2.2, 50.0, 25.0, &["embedder"]),
    ("ingest-store", "Ingestion: vector storage", "Vectors are indexed in a vector database for fast similarity search.", 1.8, 70.0, 25.0, &["vectordb"]),
    ("query-start", "Query: user question", "The user asks how much their camera weighs.", 1.5, 10.0, 70.0, &["client"]),
    ("query-clarify", "Query: clarification", "Several cameras match, so the system asks which model the user means.", 1.5, 10.0, 70.0, &["client", "clarification"]),
    ("query-clarify-response", "Query: user answers", "The user names the exact model and the query becomes specific.", 1.5, 10.0, 70.0, &["client", "clarification-response"]),
    ("query-api", "Query: API layer", "The backend receives the full question and orchestrates retrieval.", 1.3, 30.0, 70.0, &["api"]),
    ("query-embed", "Query: question embedding", "The question is embedded with the same model used for the documents.", 2.0, 50.0, 55.0, &["query-embedder"]),
    ("query-search", "Query: similarity search", "The query vector is compared against the stored vectors by cosine similarity.", 2.0, 85.0, 30.0, &["similarity-viz"]),
    ("query-topk", "Query: top-k retrieval", "The three closest chunks are retrieved.", 1.8, 85.0, 30.0, &["vectordb", "topk-results"]),
    ("query-context", "Query: context assembly", "Retrieved chunks and the question are combined into an augmented prompt.", 2.2, 55.0, 82.0, &["context"]),
    ("query-llm", "Query: generation", "The model reads the augmented prompt and generates a grounded answer token by token.", 2.0, 78.0, 78.0, &["llm", "token-generation"]),
    ("query-stream", "Query: streaming", "Tokens stream back through the API to the client as they are produced.", 1.3, 40.0, 70.0, &["streaming"]),
    ("answer-revealed", "Query: answer", "The complete answer appears, backed by the retrieved manual pages.", 2.0, 12.0, 75.0, &["client", "answer-complete"]),
    ("complete", "RAG complete", "The answer comes from the user's own documents instead of generic training data.", 1.0, 50.0, 50.0, &[]),
];

const MCP: &[StepRow] = &[
    ("intro", "Model Context Protocol", "MCP lets an assistant call external tools through a common protocol. Follow a coding request that needs data from an issue tracker.", 1.0, 50.0, 50.0, &[]),
    ("editor-start", "Editor and assistant ready", "The developer works in an editor with an AI assistant attached.", 1.5, 20.0, 55.0, &["editor"]),
    ("mcp-init", "MCP server starts", "The MCP server boots and connects to the issue tracker.", 1.8, 50.0, 28.0, &["mcp"]),
    ("mcp-capabilities", "Server announces tools", "The server tells the assistant which tools it offers.", 1.3, 30.0, 35.0, &["mcp", "editor", "msg-capabilities"]),
    ("user-request", "Developer asks", "The developer asks for an implementation plan for a ticket.", 2.5, 30.0, 55.0, &["editor", "user-input"]),
    ("prompt-enrich", "Prompt enrichment", "The assistant adds the tool list and workspace context to the prompt.", 2.5, 30.0, 55.0, &["editor", "prompt-enriched"]),
    ("llm-call-1", "First model request", "The enriched prompt is sent to the model.", 1.3, 45.0, 50.0, &["editor", "llm", "msg-to-llm-1"]),
    ("llm-decision", "Model needs a tool", "The model cannot answer without the ticket and decides to call a tool.", 1.6, 72.0, 50.0, &["llm", "tool-decision"]),
    ("tool-call-back", "Tool call returned", "The model replies with a structured tool call instead of text.", 1.3, 50.0, 50.0, &["msg-tool-call"]),
    ("assistant-routes", "Assistant routes the call", "The assistant forwards the tool call to the MCP server.", 1.4, 30.0, 35.0, &["mcp", "editor", "msg-to-mcp"]),
    ("mcp-to-tracker", "Server queries the tracker", "The server translates the call into an HTTP request.", 1.3, 50.0, 45.0, &["mcp", "tracker", "msg-api-call"]),
    ("tracker-response", "Tracker answers", "The tracker returns the ticket as JSON.", 1.3, 50.0, 45.0, &["mcp", "tracker", "msg-json-response"]),
    ("mcp-to-assistant", "Tool result", "The server hands the ticket data back to the assistant.", 1.2, 30.0, 35.0, &["editor", "mcp", "msg-tool-result"]),
    ("context-ready", "Context complete", "The assistant now holds everything the model asked for.", 1.5, 20.0, 55.0, &["editor", "context-ready"]),
    ("llm-call-2", "Augmented request", "Prompt and tool result go back to the model.", 1.2, 50.0, 50.0, &["msg-to-llm-2"]),
    ("llm-generates", "Model generates", "The model writes the plan using the ticket details.", 1.6, 72.0, 50.0, &["llm", "generating"]),
    ("response-stream", "Response", "The answer streams back to the assistant.", 1.2, 50.0, 50.0, &["msg-response"]),
    ("response-shown", "Shown in the editor", "The plan appears in the chat panel.", 1.5, 20.0, 55.0, &["editor", "response-shown"]),
    ("code-gen", "Code generation", "Follow-up coding talks to the model directly; no tool is needed.", 1.5, 20.0, 55.0, &["editor", "code-gen"]),
    ("code-loop", "Iteration", "Requests go back and forth while the MCP server stays idle.", 1.1, 50.0, 50.0, &["code-loop"]),
    ("complete", "MCP complete", "Tools were called only when the model needed outside data.", 1.0, 50.0, 50.0, &[]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Walkthrough {
    Rag,
    Mcp,
}

impl Walkthrough {
    pub const ALL: [Walkthrough; 2] = [Walkthrough::Rag, Walkthrough::Mcp];

    pub fn name(&self) -> &'static str {
        match self {
            Walkthrough::Rag => "rag",
            Walkthrough::Mcp => "mcp",
        }
    }

    fn rows(&self) -> &'static [StepRow] {
        match self {
            Walkthrough::Rag => RAG,
            Walkthrough::Mcp => MCP,
        }
    }

    pub fn steps(&self) -> Vec<FlowStep> {
        self.rows()
            .iter()
            .map(|&(id, title, description, zoom, x, y, highlights)| {
                let step = FlowStep::new(id, title, description).with_camera(zoom, x, y);
                if highlights.is_empty() {
                    step
                } else {
                    step.with_highlights(highlights.iter().copied())
                }
            })
            .collect()
    }
}

impl fmt::Display for Walkthrough {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Walkthrough {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter()
                 .find(|w| w.name().eq_ignore_ascii_case(s.trim()))
                 .ok_or_else(|| AppError::Config(format!("recorrido desconocido '{s}' (rag, mcp)")))
    }
}

#[cfg(test)]
mod tests {
    use llmx_core::FlowDefinition;

    use super::*;

    #[test]
    fn builtins_are_valid_definitions() {
        for w in Walkthrough::ALL {
            let def = FlowDefinition::new(w.steps()).unwrap();
            def.validate().unwrap();
            assert_eq!(def.steps()[0].id, "intro");
            assert_eq!(def.steps()[def.last_index()].id, "complete");
        }
    }

    #[test]
    fn rag_camera_and_highlights() {
        let steps = Walkthrough::Rag.steps();
        assert_eq!(steps.len(), 17);
        let chunk = &steps[2];
        assert_eq!((chunk.zoom, chunk.focus_x, chunk.focus_y), (2.0, 30.0, 25.0));
        assert!(chunk.is_highlighted("chunker"));
        assert!(steps[0].highlights().is_empty());
        assert!(steps.iter().all(|s| !s.auto_advances()));
    }

    #[test]
    fn parse_names() {
        assert_eq!("RAG".parse::<Walkthrough>().unwrap(), Walkthrough::Rag);
        assert!("training".parse::<Walkthrough>().is_err());
    }
}
