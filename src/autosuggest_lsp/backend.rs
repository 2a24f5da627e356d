use super::dictionary::*;
use super::trie::*;
use super::util::*;

use clap::Parser;
use hashbrown::HashMap;
use simple_log::*;
use tokio::sync::Mutex;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::*;

pub const SELECT_COMMAND: &str = "autosuggest.select";
pub const DELETE_COMMAND: &str = "autosuggest.delete";
pub const INSERT_COMMAND: &str = "autosuggest.insert";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct LspArgs {
    #[arg(long)]
    dictionary: Vec<String>,
    #[arg(long, default_value_t = 2)]
    min_word_len: usize,
    #[arg(long, default_value_t = true)]
    document_source: bool,
    #[arg(long)]
    pub debug: bool,
}

#[derive(Debug)]
pub struct Backend {
    documents: Mutex<HashMap<String, String>>,
    trie: Mutex<Trie>,
    lsp_args: LspArgs,
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, _: InitializeParams) -> Result<InitializeResult> {
        for path in self.lsp_args.dictionary.iter() {
            info!("loading dictionary: {}", path);
            let words = load_dictionary(path);
            let mut trie_lock = self.trie.lock().await;
            trie_lock.populate(words);
        }
        let trie_lock = self.trie.lock().await;
        info!("words in index: {}", trie_lock.count());

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::FULL,
                )),
                completion_provider: Some(CompletionOptions {
                    resolve_provider: Some(false),
                    ..CompletionOptions::default()
                }),
                execute_command_provider: Some(ExecuteCommandOptions {
                    commands: vec![
                        SELECT_COMMAND.to_string(),
                        DELETE_COMMAND.to_string(),
                        INSERT_COMMAND.to_string(),
                    ],
                    ..ExecuteCommandOptions::default()
                }),
                ..ServerCapabilities::default()
            },
            ..InitializeResult::default()
        })
    }

    async fn shutdown(&self) -> Result<()> {
        info!("shutdown autosuggest-lsp");
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let mut document_lock = self.documents.lock().await;
        document_lock.insert(
            params.text_document.uri.to_string(),
            params.text_document.text.clone(),
        );

        self.learn_words(&params.text_document.text).await;
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        // learned words stay in the index; removal is an explicit command
        let mut document_lock = self.documents.lock().await;
        document_lock.remove(&params.text_document.uri.to_string());
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let mut document_lock = self.documents.lock().await;

        let uri = params.text_document.uri.to_string();
        if let Some(content) = document_lock.get_mut(&uri) {
            if let Some(last_change) = params.content_changes.last() {
                *content = last_change.text.clone();
            }
        }
        for content_change in params.content_changes.iter() {
            self.learn_words(&content_change.text).await;
        }
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let position = params.text_document_position.position;

        let mut completions = Vec::new();
        if let Some(current_line) = self.get_current_line(&params).await {
            let prefix = word_prefix(&current_line, position.character as usize);
            if !prefix.is_empty() {
                let trie_lock = self.trie.lock().await;
                let words = trie_lock.suggest(&prefix);
                completions.extend(words.into_iter().enumerate().map(|(rank, word)| {
                    CompletionItem {
                        label: word.clone(),
                        kind: Some(CompletionItemKind::TEXT),
                        // clients re-sort items, zero-padded ranks keep the
                        // index ordering
                        sort_text: Some(format!("{:06}", rank)),
                        command: Some(Command {
                            title: "autosuggest: select".to_string(),
                            command: SELECT_COMMAND.to_string(),
                            arguments: Some(vec![serde_json::Value::String(word)]),
                        }),
                        ..CompletionItem::default()
                    }
                }));
            }
        }
        Ok(Some(CompletionResponse::Array(completions)))
    }

    async fn execute_command(
        &self,
        params: ExecuteCommandParams,
    ) -> Result<Option<serde_json::Value>> {
        let word = match params.arguments.first().and_then(|arg| arg.as_str()) {
            Some(word) => word.to_string(),
            None => {
                warn!("command {} needs a word argument", params.command);
                return Ok(None);
            }
        };

        let mut trie_lock = self.trie.lock().await;
        match params.command.as_str() {
            SELECT_COMMAND => {
                if !trie_lock.select(&word) {
                    warn!("select: word not in index: {}", word);
                }
            }
            DELETE_COMMAND => {
                if !trie_lock.delete(&word) {
                    warn!("delete: word not in index: {}", word);
                }
            }
            INSERT_COMMAND => {
                trie_lock.insert(&word);
            }
            unknown => {
                warn!("unknown command: {}", unknown);
            }
        }
        Ok(None)
    }
}

impl Backend {
    pub fn new(lsp_args: LspArgs) -> Self {
        return Self {
            documents: Mutex::new(HashMap::new()),
            trie: Mutex::new(Trie::new()),
            lsp_args,
        };
    }

    async fn learn_words(&self, content: &str) {
        if !self.lsp_args.document_source {
            return;
        }
        let words = extract_words(content, self.lsp_args.min_word_len);
        let mut trie_lock = self.trie.lock().await;
        for word in words.iter() {
            trie_lock.insert(word);
        }
    }

    async fn get_current_line(&self, params: &CompletionParams) -> Option<String> {
        let uri = params.text_document_position.text_document.uri.to_string();
        let position = params.text_document_position.position;
        let document_lock = self.documents.lock().await;
        let content = document_lock.get(&uri)?;
        content
            .split('\n')
            .nth(position.line as usize)
            .map(|line| line.to_string())
    }
}
